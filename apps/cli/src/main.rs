use std::{sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use consignment_api::{HttpConsignmentApi, LocationProvider, MockConsignmentApi, SubmissionSink};
use form_core::{ConsignmentFormController, Field, FormSettings, LocationState, SubmitOutcome};
use shared::domain::Units;
use tracing::info;

/// Fills the consignment form from flags and submits it once.
#[derive(Parser, Debug)]
struct Args {
    /// Consignment server to talk to; the in-process mock is used when omitted.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    source: Option<String>,
    #[arg(long)]
    destination: Option<String>,
    #[arg(long)]
    weight: Option<String>,
    #[arg(long)]
    width: Option<String>,
    #[arg(long)]
    height: Option<String>,
    #[arg(long)]
    depth: Option<String>,
    #[arg(long, default_value_t = Units::Centimetres)]
    units: Units,
    /// Latency of the mock location lookup.
    #[arg(long, default_value_t = 1000)]
    mock_delay_ms: u64,
    /// Make the mock backend reject submissions.
    #[arg(long)]
    mock_fail: bool,
    /// Stay alive until the success banner clears.
    #[arg(long)]
    wait_for_reset: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("warn").init();
    let args = Args::parse();

    let (provider, sink): (Arc<dyn LocationProvider>, Arc<dyn SubmissionSink>) =
        match &args.server_url {
            Some(url) => {
                let api = Arc::new(HttpConsignmentApi::new(url)?);
                info!(base_url = %api.base_url(), "using consignment server");
                (api.clone(), api)
            }
            None => {
                let api = Arc::new(
                    MockConsignmentApi::new()
                        .with_locations_delay(Duration::from_millis(args.mock_delay_ms)),
                );
                api.set_fail_submissions(args.mock_fail);
                (api.clone(), api)
            }
        };

    let settings = FormSettings::from_env();
    let reset_delay = settings.success_reset_delay;
    let controller = ConsignmentFormController::mount(provider, sink, settings);

    println!("Loading locations...");
    controller.locations_settled().await;
    match controller.locations().await {
        LocationState::Ready(locations) => println!("Locations: {}", locations.join(", ")),
        LocationState::Failed { reason } => println!("Failed to load locations: {reason}"),
        LocationState::Loading => {}
    }

    let inputs = [
        (Field::Source, &args.source),
        (Field::Destination, &args.destination),
        (Field::Weight, &args.weight),
        (Field::Width, &args.width),
        (Field::Height, &args.height),
        (Field::Depth, &args.depth),
    ];
    for (field, value) in inputs {
        if let Some(value) = value {
            controller.set_field(field, value.as_str()).await?;
        }
    }
    controller.set_units(args.units).await;

    match controller.submit().await {
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors.iter() {
                println!("{field}: {message}");
            }
        }
        SubmitOutcome::Busy => println!("A submission is already in progress"),
        SubmitOutcome::Submitted(receipt) => {
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
        SubmitOutcome::Failed { reason } => info!(%reason, "submission failed"),
    }

    let view = controller.view().await;
    if let Some(banner) = &view.banner {
        println!("{}", banner.message());
    }

    if args.wait_for_reset && view.banner.is_some() && !view.submit_disabled {
        tokio::time::sleep(reset_delay + Duration::from_millis(50)).await;
        println!("Form state: {}", controller.state().await.name());
    }

    controller.unmount();
    Ok(())
}
