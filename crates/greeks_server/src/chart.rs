//! Gamma curve rendering
//!
//! Draws the gamma profile as an SVG fragment suitable for embedding in
//! a server-rendered page.

use plotters::prelude::*;

use crate::render::RenderError;

/// Visual style for the gamma line
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Line color as (r, g, b)
    pub rgb: (u8, u8, u8),
    /// Line opacity in [0, 1]
    pub opacity: f64,
    /// Series label shown in the legend
    pub label: String,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            rgb: (0, 128, 0),
            opacity: 0.8,
            label: "gamma".to_string(),
            width: 900,
            height: 500,
        }
    }
}

/// Render a gamma-vs-spot line chart as an SVG string.
///
/// The output is a complete `<svg>` element that embeds directly into
/// HTML. Axis ranges derive from the data with a small margin on the
/// y-axis; an empty series still yields a valid chart frame.
///
/// # Errors
/// - `RenderError::SeriesLengthMismatch` if `xs` and `ys` differ in
///   length
/// - `RenderError::Chart` if the drawing backend fails
pub fn render_gamma_chart(
    xs: &[f64],
    ys: &[f64],
    style: &ChartStyle,
) -> Result<String, RenderError> {
    if xs.len() != ys.len() {
        return Err(RenderError::SeriesLengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let (x_min, x_max) = axis_range(xs, 0.0);
    let (y_min, y_max) = axis_range(ys, 0.05);

    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(&style.label, ("sans-serif", 24))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(to_chart_error)?;

        chart
            .configure_mesh()
            .x_desc("Spot")
            .y_desc("Gamma")
            .draw()
            .map_err(to_chart_error)?;

        let color = RGBColor(style.rgb.0, style.rgb.1, style.rgb.2).mix(style.opacity);
        chart
            .draw_series(LineSeries::new(
                xs.iter().copied().zip(ys.iter().copied()),
                color.stroke_width(2),
            ))
            .map_err(to_chart_error)?
            .label(style.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(to_chart_error)?;

        root.present().map_err(to_chart_error)?;
    }

    Ok(svg)
}

fn to_chart_error<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Chart(err.to_string())
}

/// Data range padded by `pad` of its width; degenerate or empty data
/// gets a unit range so the backend always has a valid axis.
fn axis_range(values: &[f64], pad: f64) -> (f64, f64) {
    let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    if !(min.is_finite() && max.is_finite()) {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let margin = (max - min) * pad;
    (min - margin, max + margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> (Vec<f64>, Vec<f64>) {
        let xs: Vec<f64> = (80..=120).map(f64::from).collect();
        let ys: Vec<f64> = xs
            .iter()
            .map(|&x| (-((x - 100.0) / 10.0_f64).powi(2)).exp() * 0.04)
            .collect();
        (xs, ys)
    }

    #[test]
    fn test_chart_is_svg() {
        let (xs, ys) = sample_series();
        let svg = render_gamma_chart(&xs, &ys, &ChartStyle::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_chart_carries_axis_labels() {
        let (xs, ys) = sample_series();
        let svg = render_gamma_chart(&xs, &ys, &ChartStyle::default()).unwrap();
        assert!(svg.contains("Spot"));
        assert!(svg.contains("Gamma"));
    }

    #[test]
    fn test_series_label_appears_in_legend_and_caption() {
        let (xs, ys) = sample_series();
        let style = ChartStyle {
            label: "profile".to_string(),
            ..Default::default()
        };
        let svg = render_gamma_chart(&xs, &ys, &style).unwrap();
        // Once in the caption and once in the drawn legend box
        assert!(svg.matches("profile").count() >= 2);
    }

    #[test]
    fn test_mismatched_series_is_an_error() {
        let err = render_gamma_chart(&[1.0, 2.0], &[0.5], &ChartStyle::default()).unwrap_err();
        assert_eq!(err, RenderError::SeriesLengthMismatch { xs: 2, ys: 1 });
    }

    #[test]
    fn test_empty_series_renders_a_frame() {
        let svg = render_gamma_chart(&[], &[], &ChartStyle::default()).unwrap();
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_single_point_series_renders() {
        let svg = render_gamma_chart(&[100.0], &[0.036], &ChartStyle::default()).unwrap();
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_custom_dimensions_are_applied() {
        let (xs, ys) = sample_series();
        let style = ChartStyle {
            width: 640,
            height: 360,
            ..Default::default()
        };
        let svg = render_gamma_chart(&xs, &ys, &style).unwrap();
        assert!(svg.contains("width=\"640\""));
        assert!(svg.contains("height=\"360\""));
    }

    #[test]
    fn test_axis_range_pads_and_handles_degenerate_data() {
        assert_eq!(axis_range(&[], 0.05), (0.0, 1.0));
        assert_eq!(axis_range(&[2.0], 0.05), (1.5, 2.5));

        let (lo, hi) = axis_range(&[0.0, 10.0], 0.05);
        assert_eq!(lo, -0.5);
        assert_eq!(hi, 10.5);
    }
}
