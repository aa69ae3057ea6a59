use yew::prelude::*;
use web_sys::HtmlCanvasElement;
use wasm_bindgen::JsCast;
use plotters::prelude::*;
use plotters::element::Pie;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;

use crate::estimator::catalog::chart_color;
use crate::estimator::{format_money, BreakdownSlice};

const CANVAS_SIZE: u32 = 320;
const LABEL_OFFSET: f64 = 14.0;

const ACCENT: RGBColor = RGBColor(0xFF, 0x80, 0x00);
const MUTED: RGBColor = RGBColor(0xD1, 0xD5, 0xDB);
const GRAY_SLICES: [RGBColor; 6] = [
    RGBColor(0x6B, 0x72, 0x80),
    RGBColor(0x9C, 0xA3, 0xAF),
    RGBColor(0xD1, 0xD5, 0xDB),
    RGBColor(0xE5, 0xE7, 0xEB),
    RGBColor(0xF3, 0xF4, 0xF6),
    RGBColor(0xF9, 0xFA, 0xFB),
];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub slices: Vec<BreakdownSlice>,
}

/// Slice captions only carry the first word of the role name.
pub fn slice_label(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

/// Caption colour for a slice: the accent keeps its own colour, grays share
/// one muted tone and anything darker gets white.
pub fn label_color(slice: RGBColor) -> RGBColor {
    if slice == ACCENT {
        ACCENT
    } else if GRAY_SLICES.contains(&slice) {
        MUTED
    } else {
        WHITE
    }
}

/// Caption anchor for slice `index`, just outside the rim at the slice's
/// mid angle. Angles start at 3 o'clock and run clockwise, as `Pie` draws them.
pub fn label_anchor(center: (i32, i32), radius: f64, sizes: &[f64], index: usize) -> (i32, i32) {
    let total: f64 = sizes.iter().sum();
    if total <= 0.0 || index >= sizes.len() {
        return center;
    }
    let before: f64 = sizes[..index].iter().sum();
    let mid = (before + sizes[index] / 2.0) / total * std::f64::consts::TAU;
    let r = radius + LABEL_OFFSET;
    (
        center.0 + (r * mid.cos()).round() as i32,
        center.1 + (r * mid.sin()).round() as i32,
    )
}

fn draw(canvas: HtmlCanvasElement, slices: &[BreakdownSlice]) -> Result<(), String> {
    canvas.set_width(CANVAS_SIZE);
    canvas.set_height(CANVAS_SIZE);

    if let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
    {
        context.clear_rect(0.0, 0.0, CANVAS_SIZE as f64, CANVAS_SIZE as f64);
    }

    if slices.is_empty() {
        return Ok(());
    }

    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas backend unavailable".to_string())?;
    let root = backend.into_drawing_area();

    let dims = root.dim_in_pixel();
    let center = (dims.0 as i32 / 2, dims.1 as i32 / 2);
    let radius = dims.0.min(dims.1) as f64 * 0.36;

    let sizes: Vec<f64> = slices.iter().map(|s| s.value as f64).collect();
    let colors: Vec<RGBColor> = (0..slices.len()).map(chart_color).collect();
    // Captions are drawn separately so each can take its slice's colour.
    let blank: Vec<&str> = vec![""; slices.len()];

    let pie = Pie::new(&center, &radius, &sizes, &colors, &blank);
    root.draw(&pie).map_err(|e| e.to_string())?;

    for (i, slice) in slices.iter().enumerate() {
        let style = ("sans-serif", 12)
            .into_font()
            .color(&label_color(colors[i]))
            .pos(Pos::new(HPos::Center, VPos::Center));
        let anchor = label_anchor(center, radius, &sizes, i);
        root.draw(&Text::new(slice_label(&slice.label), anchor, style))
            .map_err(|e| e.to_string())?;
    }
    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

#[function_component]
pub fn CostPieChart(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let slices = props.slices.clone();
        use_effect_with_deps(move |slices: &Vec<BreakdownSlice>| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(e) = draw(canvas, slices) {
                    gloo_console::error!("Failed to draw cost breakdown:", e);
                }
            }
            || ()
        }, slices);
    }

    html! {
        <div class="cost-chart">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                style="max-width: 100%;"
            />
            <ul class="cost-legend">
                { for props.slices.iter().enumerate().map(|(i, slice)| {
                    let color = chart_color(i);
                    html! {
                        <li key={i}>
                            <span
                                class="legend-swatch"
                                style={format!("background: rgb({}, {}, {});", color.0, color.1, color.2)}
                            ></span>
                            <span class="legend-name">{&slice.label}</span>
                            <span class="legend-value">{format!("{}/mo", format_money(slice.value))}</span>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_uses_first_word() {
        assert_eq!(slice_label("Backend Engineer"), "Backend");
        assert_eq!(slice_label("UI/UX Designer"), "UI/UX");
        assert_eq!(slice_label("  Solo "), "Solo");
        assert_eq!(slice_label(""), "");
    }

    #[test]
    fn captions_follow_their_slice_colour() {
        assert_eq!(label_color(chart_color(0)), ACCENT);
        assert_eq!(label_color(chart_color(1)), WHITE);
        for i in 2..8 {
            assert_eq!(label_color(chart_color(i)), MUTED);
        }
    }

    #[test]
    fn captions_sit_outside_the_slice_middle() {
        let center = (160, 160);
        // Two equal halves: first mid angle points down, second points up.
        assert_eq!(label_anchor(center, 100.0, &[1.0, 1.0], 0), (160, 274));
        assert_eq!(label_anchor(center, 100.0, &[1.0, 1.0], 1), (160, 46));
        assert_eq!(label_anchor(center, 100.0, &[], 0), center);
    }
}
