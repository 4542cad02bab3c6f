use crate::data_structures::{CityBundle, VisualizationParameters};
use crate::driver::Panel;
use crate::error::PlotResult;
use crate::float_helper::Bounds;
use crate::predefined_color;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

pub const FIGURE_TITLE: &str = "Road Networks and Restaurant POIs Across Three European Cities";

predefined_color!(VERTEX_BLUE, 173, 216, 230, 0.6, "Semi-transparent light blue for vertices");
predefined_color!(ROAD_BLUE, 0, 0, 255, 0.5, "Semi-transparent blue for road segments");
predefined_color!(RESTAURANT_RED, 255, 0, 0, "Opaque red for restaurants");

// Share of the canvas left to the panels, the rest holds the legend.
const PANEL_SHARE: f64 = 0.9;
const AXIS_PADDING: f64 = 0.02;

/// Pixel sizes derived from the canvas height. Everything was tuned for a 600 px tall figure.
struct Scale(f64);

impl Scale {
    fn of(figure_size: (u32, u32)) -> Scale {
        Scale((figure_size.1 as f64 / 600.0).max(0.5))
    }

    fn px(&self, base: f64) -> u32 {
        (base * self.0).round().max(1.0) as u32
    }

    fn font(&self, base: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, base * self.0, FontStyle::Normal)
    }
}

/// Draws the figure and writes it to `params.output_file`.
pub fn render(panels: &[Panel], params: &VisualizationParameters) -> PlotResult<()> {
    let root = BitMapBackend::new(&params.output_file, params.figure_size).into_drawing_area();
    draw_figure(&root, panels)?;
    root.present()?;
    Ok(())
}

/// Draws every panel side by side, then the shared legend and the title.
/// Panels without a bundle stay blank.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    panels: &[Panel],
) -> PlotResult<()> {
    let scale = Scale::of(root.dim_in_pixel());
    root.fill(&WHITE)?;

    let body = root.titled(FIGURE_TITLE, scale.font(22.0))?;
    let (_, body_height) = body.dim_in_pixel();
    let panel_height = (body_height as f64 * PANEL_SHARE) as i32;
    let (panel_strip, legend_strip) = body.split_vertically(panel_height);

    let areas = panel_strip.split_evenly((1, panels.len().max(1)));
    for (panel, area) in panels.iter().zip(areas.iter()) {
        if let Some(bundle) = &panel.bundle {
            draw_city(area, &panel.city.name, bundle, &scale)?;
        }
    }

    draw_legend(&legend_strip, &scale)
}

fn draw_city<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    city_name: &str,
    bundle: &CityBundle,
    scale: &Scale,
) -> PlotResult<()> {
    let bounds = Bounds::of(bundle.points(), AXIS_PADDING);

    // plotters captions are single-line, so the name goes into a title band above the chart
    let caption = bundle.caption(city_name);
    let mut lines = caption.splitn(2, '\n');
    let name = lines.next().unwrap_or(city_name);
    let counts = lines.next().unwrap_or_default();
    let area = area.titled(name, scale.font(13.0))?;

    let mut chart = ChartBuilder::on(&area)
        .caption(counts, scale.font(11.0))
        .margin(scale.px(8.0))
        .x_label_area_size(scale.px(30.0))
        .y_label_area_size(scale.px(40.0))
        .build_cartesian_2d(bounds.lon, bounds.lat)?;

    chart
        .configure_mesh()
        .x_desc("Longitude")
        .y_desc("Latitude")
        .x_labels(5)
        .y_labels(5)
        .x_label_formatter(&|x| format!("{:.2}", x))
        .y_label_formatter(&|y| format!("{:.2}", y))
        .label_style(scale.font(9.0))
        .axis_desc_style(scale.font(10.0))
        .bold_line_style(&BLACK.mix(0.15))
        .light_line_style(&BLACK.mix(0.05))
        .draw()?;

    // Draw order is the z-order: vertices, then roads, then restaurants on top.
    let vertex_radius = scale.px(1.0);
    chart.draw_series(
        bundle
            .vertices
            .values()
            .map(|&point| Circle::new(point, vertex_radius, VERTEX_BLUE.filled())),
    )?;

    let road = ROAD_BLUE.stroke_width(scale.px(0.3));
    chart.draw_series(
        bundle
            .sampled_edges
            .iter()
            .map(|&(start, end)| PathElement::new(vec![start, end], road)),
    )?;

    let restaurant_radius = scale.px(2.2);
    chart.draw_series(
        bundle
            .restaurants
            .iter()
            .map(|&point| Circle::new(point, restaurant_radius, RESTAURANT_RED.filled())),
    )?;

    Ok(())
}

fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scale: &Scale,
) -> PlotResult<()> {
    let (width, height) = area.dim_in_pixel();
    let font_size = scale.px(11.0) as i32;
    let y = height as i32 / 2;
    let swatch = scale.px(10.0) as i32;
    let slot = width as i32 / 5;

    let labels = ["Vertices", "Edges (Roads)", "Restaurants"];
    for (idx, label) in labels.iter().enumerate() {
        let x = width as i32 / 2 + (idx as i32 - 1) * slot - slot / 4;
        match idx {
            0 => area.draw(&Circle::new((x, y), scale.px(3.0), VERTEX_BLUE.filled()))?,
            1 => area.draw(&PathElement::new(
                vec![(x - swatch, y), (x + swatch, y)],
                ROAD_BLUE.stroke_width(scale.px(1.0)),
            ))?,
            _ => area.draw(&Circle::new((x, y), scale.px(4.0), RESTAURANT_RED.filled()))?,
        }
        area.draw(&Text::new(
            *label,
            (x + swatch + scale.px(4.0) as i32, y - font_size / 2),
            scale.font(11.0),
        ))?;
    }

    Ok(())
}
