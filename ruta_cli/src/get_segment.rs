use clap::Args;
use ruta_directions::{geopoint::GeoPoint, segment::SegmentFetcher};
use tracing::info;

use crate::{
    output::{RouteView, print_view},
    provider_args::ProviderArgs,
};

#[derive(Args)]
pub struct GetSegmentArgs {
    /// Origin as "lat,lng"
    #[arg(allow_hyphen_values = true)]
    origin: GeoPoint,

    /// Destination as "lat,lng"
    #[arg(allow_hyphen_values = true)]
    destination: GeoPoint,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn run(args: GetSegmentArgs) -> anyhow::Result<()> {
    let client = args.provider.client()?;

    info!(
        "Routing {} from {} to {}",
        args.provider.profile, args.origin, args.destination
    );

    let segment = client
        .fetch_segment(args.origin, args.destination, args.provider.profile)
        .await?;

    let stops = [args.origin, args.destination];
    let view = RouteView::from_segment(&stops, &segment);

    print_view(&view, args.provider.format, &segment)
}
