use std::ops::Range;

use crate::entities::TextureId;
use crate::render::DrawCommand;

use super::pipeline::SpriteVertex;

/// A run of consecutive draw commands that sample the same texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch {
    pub texture: TextureId,
    pub vertices: Range<u32>,
}

/// Turn an ordered draw list into one vertex stream plus texture batches.
///
/// Order is preserved exactly: a new batch starts every time the texture
/// changes, so tiles drawn before the player stay underneath it even though
/// both may use several textures. Commands whose texture has no known size
/// are skipped.
pub fn build_batches(
    commands: &[DrawCommand],
    texture_size: impl Fn(TextureId) -> Option<(u32, u32)>,
) -> (Vec<SpriteVertex>, Vec<Batch>) {
    let mut vertices = Vec::with_capacity(commands.len() * 6);
    let mut batches: Vec<Batch> = Vec::new();

    for cmd in commands {
        let Some((tex_w, tex_h)) = texture_size(cmd.texture) else { continue };
        if tex_w == 0 || tex_h == 0 {
            continue;
        }

        let dest = cmd.dest_rect();
        let (px, py, pw, ph) = (dest.x, dest.y, dest.w, dest.h);

        let uv_min = [cmd.src.x / tex_w as f32, cmd.src.y / tex_h as f32];
        let uv_max = [
            (cmd.src.x + cmd.src.w) / tex_w as f32,
            (cmd.src.y + cmd.src.h) / tex_h as f32,
        ];

        let tl = SpriteVertex { position: [px,      py     ], uv: uv_min };
        let tr = SpriteVertex { position: [px + pw, py     ], uv: [uv_max[0], uv_min[1]] };
        let bl = SpriteVertex { position: [px,      py + ph], uv: [uv_min[0], uv_max[1]] };
        let br = SpriteVertex { position: [px + pw, py + ph], uv: uv_max };

        let start = vertices.len() as u32;
        vertices.extend_from_slice(&[tl, bl, tr, tr, bl, br]);
        let end = vertices.len() as u32;

        match batches.last_mut() {
            Some(last) if last.texture == cmd.texture => last.vertices.end = end,
            _ => batches.push(Batch { texture: cmd.texture, vertices: start..end }),
        }
    }

    (vertices, batches)
}
