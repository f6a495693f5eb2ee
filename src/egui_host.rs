//! Presents a surface's [`CursorState`](crate::cursor::CursorState) through egui.
//!
//! egui resets the cursor icon every frame, so hosts call [`show_cursor`]
//! once per frame while the pointer is over the canvas.

use egui::{Color32, Context, CursorIcon, Id, LayerId, Order, Rect, pos2, vec2};

use crate::cursor::Cursor;
use crate::cursor_textures::CursorTextures;

/// Paints above every other layer, tooltips included
fn cursor_layer() -> LayerId {
    LayerId::new(Order::Tooltip, Id::new("leinwand_cursor"))
}

pub fn show_cursor(ctx: &Context, cursor: &Cursor, textures: &mut CursorTextures) {
    match cursor {
        Cursor::System(kind) => ctx.set_cursor_icon(kind.to_egui()),
        Cursor::Image(image) => {
            // egui has no portable image cursors: hide the system one and
            // draw the image where it would be.
            ctx.set_cursor_icon(CursorIcon::None);

            let Some(pointer) = ctx.pointer_hover_pos() else {
                return;
            };

            let texture = textures.get_or_load(ctx, image);
            let pixels_per_point = ctx.pixels_per_point();
            let [w, h] = image.size();
            let [hx, hy] = image.hotspot();

            let min = pointer - vec2(hx as f32, hy as f32) / pixels_per_point;
            let rect = Rect::from_min_size(min, vec2(w as f32, h as f32) / pixels_per_point);
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));

            ctx.layer_painter(cursor_layer())
                .image(texture, rect, uv, Color32::WHITE);
        }
    }
}
