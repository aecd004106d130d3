//! `appliances`: list paired appliances.

use tabled::Tabled;

use homeconnect_api::HomeAppliance;

use crate::cli::GlobalOpts;
use crate::config::Session;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ApplianceRow {
    #[tabled(rename = "HA ID")]
    ha_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Connected")]
    connected: String,
}

fn to_row(a: &HomeAppliance) -> ApplianceRow {
    ApplianceRow {
        ha_id: a.ha_id.clone(),
        name: a.name.clone().unwrap_or_default(),
        kind: a.kind.clone().unwrap_or_default(),
        brand: a.brand.clone().unwrap_or_default(),
        connected: if a.connected { "yes" } else { "no" }.into(),
    }
}

pub async fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let appliances = session.client.get_home_appliances().await?.homeappliances;

    let out = output::render_list(
        global.output,
        &appliances,
        to_row,
        |a| a.ha_id.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
