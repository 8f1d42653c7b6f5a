use clap::Args;
use ruta_directions::{geopoint::GeoPoint, stitcher::stitch_route};
use tracing::info;

use crate::{
    output::{RouteView, print_view},
    provider_args::ProviderArgs,
};

#[derive(Args)]
pub struct GetRouteArgs {
    /// Ordered stops as "lat,lng", at least two
    #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
    stops: Vec<GeoPoint>,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn run(args: GetRouteArgs) -> anyhow::Result<()> {
    let client = args.provider.client()?;

    info!(
        "Routing {} through {} stops",
        args.provider.profile,
        args.stops.len()
    );

    let route = stitch_route(&client, &args.stops, args.provider.profile).await?;
    let view = RouteView::from_route(&args.stops, &route);

    print_view(&view, args.provider.format, &route)
}
