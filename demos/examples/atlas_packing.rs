// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas packing.
//!
//! Pack colored tiles into a growing texture atlas, blit them into a pixel
//! buffer, and run-length encode a scanline of the result.
//!
//! Run:
//! - `cargo run -p tessel_demos --example atlas_packing`

use tessel_collections::{IndexMap, RleVec};
use tessel_math::Rect;
use tessel_pack::{BoxPacker, PackError};
use tessel_pixbuf::{ByteRgba, ColorFormat, Pixbuf, palette};

fn main() {
    // Tile id -> (width, height, color). Ids are sparse, like glyph codes.
    let tiles = [
        (65_usize, 20, 28, palette::RED),
        (66, 18, 28, palette::GREEN),
        (67, 40, 12, palette::BLUE),
        (90, 6, 30, palette::YELLOW),
        (120, 24, 24, palette::MEDIUM_BLUE),
        (121, 12, 10, palette::LIGHT_CYAN),
    ];

    // Start small and grow on overflow.
    let mut packer = BoxPacker::new(32, 32, 1);
    let mut placed: IndexMap<Rect<i32>> = IndexMap::new();
    for &(id, w, h, _) in &tiles {
        let rect = loop {
            match packer.pack(w, h) {
                Ok(rect) => break rect,
                Err(PackError::Overflow { .. }) => {
                    let (pw, ph) = (packer.width(), packer.height());
                    packer.enlarge(pw * 2, ph * 2).expect("doubling always grows");
                    println!("grew atlas to {}x{}", packer.width(), packer.height());
                }
                Err(e) => panic!("{e}"),
            }
        };
        println!("tile {id}: {w}x{h} at ({}, {})", rect.left, rect.bottom);
        placed.insert(id, rect);
    }

    let size = |v: i32| usize::try_from(v).expect("packer sizes are positive");
    let mut atlas = Pixbuf::new(size(packer.width()), size(packer.height()), ColorFormat::Rgba);
    atlas.fill(palette::DARK_GREY);

    for &(id, _, _, color) in &tiles {
        let rect = placed[id];
        let mut tile = Pixbuf::new(size(rect.width()), size(rect.height()), ColorFormat::Rgba);
        tile.fill(color);
        atlas
            .blit_from(size(rect.left), size(rect.bottom), &tile)
            .expect("tile and atlas share a format");
    }

    // Every tile reads back its own color at its origin.
    for (id, rect) in placed.iter() {
        let color = tiles.iter().find(|t| t.0 == id).map(|t| t.3);
        assert_eq!(Some(atlas.read_pixel(size(rect.left), size(rect.bottom))), color);
    }

    // Run-length encode the second row; padding shows up as grey runs.
    let mut row: RleVec<ByteRgba> = RleVec::new();
    let mut x = 0;
    while x < atlas.width() {
        let color = atlas.read_pixel(x, 1);
        let run = (x..atlas.width())
            .take_while(|&x| atlas.read_pixel(x, 1) == color)
            .count();
        row.push_run(color, run).expect("runs are never empty");
        x += run;
    }
    assert_eq!(row.len(), atlas.width());
    println!("row 1 has {} runs:", row.runs().len());
    for (color, count) in row.runs() {
        println!("  {} x{count}", color.to_rgb_hex());
    }
}
