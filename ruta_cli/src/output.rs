use clap::ValueEnum;
use comfy_table::{Table, presets::UTF8_FULL};
use geojson::Value::LineString;
use geojson::{Feature, GeoJson, Geometry};
use ruta_directions::{
    geopoint::GeoPoint, maneuver::format_step_distance, segment::SegmentResult,
    stitcher::StitchedRoute,
};
use serde::Serialize;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Geojson,
}

pub struct StepRow {
    pub instruction: String,
    pub distance: String,
    pub maneuver: u8,
    pub point_index: usize,
}

/// What gets printed for a single segment or a stitched route.
pub struct RouteView<'a> {
    pub stops: &'a [GeoPoint],
    pub path: &'a [GeoPoint],
    pub distance_km: f64,
    pub duration_min: u32,
    pub steps: Vec<StepRow>,
}

impl<'a> RouteView<'a> {
    pub fn from_segment(stops: &'a [GeoPoint], segment: &'a SegmentResult) -> Self {
        RouteView {
            stops,
            path: &segment.path,
            distance_km: segment.distance_km,
            duration_min: segment.duration_min,
            steps: segment
                .steps
                .iter()
                .map(|step| StepRow {
                    instruction: step.instruction.clone(),
                    distance: format_step_distance(step.distance),
                    maneuver: step.maneuver.code(),
                    point_index: step.point_index,
                })
                .collect(),
        }
    }

    pub fn from_route(stops: &'a [GeoPoint], route: &'a StitchedRoute) -> Self {
        RouteView {
            stops,
            path: &route.path,
            distance_km: route.distance_km,
            duration_min: route.duration_min,
            steps: route
                .steps
                .iter()
                .map(|step| StepRow {
                    instruction: step.instruction.clone(),
                    distance: step.formatted_distance.clone(),
                    maneuver: step.maneuver.code(),
                    point_index: step.point_index,
                })
                .collect(),
        }
    }

    /// Sum of the straight lines between consecutive stops, in kilometers.
    pub fn straight_line_km(&self) -> f64 {
        self.stops
            .windows(2)
            .map(|pair| pair[0].haversine_distance(&pair[1]))
            .sum::<f64>()
            / 1000.0
    }

    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            "Stops",
            "Points",
            "Distance",
            "Duration",
            "Straight line",
        ]);
        table.add_row(vec![
            self.stops.len().to_string(),
            self.path.len().to_string(),
            format!("{:.2} km", self.distance_km),
            format!("{} min", self.duration_min),
            format!("{:.2} km", self.straight_line_km()),
        ]);
        table
    }

    pub fn steps_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["#", "Instruction", "Distance", "Type", "Point"]);

        for (i, step) in self.steps.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                step.instruction.clone(),
                step.distance.clone(),
                step.maneuver.to_string(),
                step.point_index.to_string(),
            ]);
        }

        table
    }

    /// The path as a LineString feature, in GeoJSON's (lng, lat) order.
    pub fn geojson(&self) -> GeoJson {
        let points: Vec<Vec<f64>> = self
            .path
            .iter()
            .map(|point| point.to_lng_lat().to_vec())
            .collect();

        let feature = Feature {
            bbox: None,
            properties: None,
            foreign_members: None,
            id: None,
            geometry: Some(Geometry::new(LineString(points))),
        };

        GeoJson::Feature(feature)
    }
}

pub fn print_view<T>(view: &RouteView, format: OutputFormat, result: &T) -> anyhow::Result<()>
where
    T: Serialize,
{
    match format {
        OutputFormat::Table => {
            println!("{}", view.summary_table());
            if !view.steps.is_empty() {
                println!("{}", view.steps_table());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Geojson => println!("{}", view.geojson()),
    }

    Ok(())
}
