use clap::Subcommand;

use crate::cli::{utils, OutputFormat};
use crate::database::models::CafeForm;
use crate::error::{ApiError, MSG_LOCATION_NOT_FOUND};
use crate::services::{CafeError, CafeService};

#[derive(Subcommand)]
pub enum DataCommands {
    #[command(about = "List every cafe")]
    List,

    #[command(about = "Show one cafe picked at random")]
    Random,

    #[command(about = "Show a single cafe")]
    Show {
        #[arg(help = "Cafe ID")]
        id: i64,
    },

    #[command(about = "Find cafes at a location (case-insensitive)")]
    Search {
        #[arg(help = "Location, e.g. \"london bridge\"")]
        loc: String,
    },

    #[command(about = "Add a cafe; amenity flags are true for any non-empty value")]
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        map_url: Option<String>,
        #[arg(long)]
        img_url: Option<String>,
        #[arg(long)]
        loc: Option<String>,
        #[arg(long)]
        seats: Option<String>,
        #[arg(long)]
        coffee_price: Option<String>,
        #[arg(long)]
        sockets: Option<String>,
        #[arg(long)]
        toilet: Option<String>,
        #[arg(long)]
        wifi: Option<String>,
        #[arg(long)]
        calls: Option<String>,
    },

    #[command(about = "Set the coffee price of a cafe")]
    UpdatePrice {
        #[arg(help = "Cafe ID")]
        id: i64,
        #[arg(help = "New price, e.g. \"£2.80\"")]
        price: String,
    },

    #[command(about = "Delete a cafe that has closed")]
    ReportClosed {
        #[arg(help = "Cafe ID")]
        id: i64,
        #[arg(long, env = "CAFE_API_KEY", help = "Shared API key")]
        api_key: Option<String>,
    },
}

// Same wording as the HTTP envelopes
fn api_err(err: CafeError) -> anyhow::Error {
    ApiError::from(err).into()
}

pub async fn handle(cmd: DataCommands, service: &CafeService, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        DataCommands::List => {
            let cafes = service.list_all().await.map_err(api_err)?;
            utils::output_cafes(&output_format, &cafes, "No cafes yet.")
        }
        DataCommands::Random => {
            let cafe = service.random_one().await.map_err(api_err)?;
            utils::output_cafe(&output_format, &cafe)
        }
        DataCommands::Show { id } => {
            let cafe = service.get(id).await.map_err(api_err)?;
            utils::output_cafe(&output_format, &cafe)
        }
        DataCommands::Search { loc } => {
            let cafes = service.find_by_location(Some(loc.as_str())).await.map_err(api_err)?;
            utils::output_cafes(&output_format, &cafes, MSG_LOCATION_NOT_FOUND)
        }
        DataCommands::Add {
            name,
            map_url,
            img_url,
            loc,
            seats,
            coffee_price,
            sockets,
            toilet,
            wifi,
            calls,
        } => {
            let form = CafeForm {
                name,
                map_url,
                img_url,
                loc,
                sockets,
                toilet,
                wifi,
                calls,
                seats,
                coffee_price,
            };
            let cafe = service.create(form).await.map_err(api_err)?;
            utils::output_success(&output_format, &format!("Added cafe {} ({}).", cafe.id, cafe.name))
        }
        DataCommands::UpdatePrice { id, price } => {
            service.update_price(id, Some(price.as_str())).await.map_err(api_err)?;
            utils::output_success(&output_format, "Successfully updated the price.")
        }
        DataCommands::ReportClosed { id, api_key } => {
            service.delete(id, api_key.as_deref()).await.map_err(api_err)?;
            utils::output_success(&output_format, "Successfully deleted the cafe.")
        }
    }
}
