use game_core::{Scene, Shape};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const TEXT_LINE_WIDTH: f64 = 2.0;

pub fn draw_frame(ctx: &CanvasRenderingContext2d, scene: &Scene) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, scene.width as f64, scene.height as f64);
    for shape in &scene.shapes {
        draw_shape(ctx, shape)?;
    }
    Ok(())
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    match shape {
        Shape::Rect {
            origin,
            size,
            paint,
        } => {
            ctx.set_fill_style_str(paint.css());
            ctx.fill_rect(
                origin.x as f64,
                origin.y as f64,
                size.x as f64,
                size.y as f64,
            );
        }
        Shape::Arc {
            center,
            radius,
            start,
            end,
            paint,
        } => {
            ctx.begin_path();
            ctx.set_fill_style_str(paint.css());
            ctx.arc(
                center.x as f64,
                center.y as f64,
                *radius as f64,
                *start as f64,
                *end as f64,
            )?;
            ctx.fill();
        }
        Shape::Line {
            from,
            to,
            width,
            paint,
        } => {
            ctx.begin_path();
            ctx.set_line_width(*width as f64);
            ctx.set_stroke_style_str(paint.css());
            ctx.move_to(from.x as f64, from.y as f64);
            ctx.line_to(to.x as f64, to.y as f64);
            ctx.stroke();
        }
        Shape::Text {
            at,
            text,
            size_px,
            paint,
        } => {
            ctx.set_line_width(TEXT_LINE_WIDTH);
            ctx.set_font(&format!("{size_px}px Arial"));
            ctx.set_stroke_style_str(paint.css());
            ctx.stroke_text(text, at.x as f64, at.y as f64)?;
        }
    }
    Ok(())
}
