//! List command implementation.
//!
//! Prints the sprite table: name, @3x size and family.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::sprites::Catalog;

/// List the sprites that would be built
#[derive(Args, Debug)]
pub struct ListArgs {}

pub fn run(_args: ListArgs, printer: &Printer) -> Result<()> {
    let catalog = Catalog::standard();
    println!("{}", render_table(&catalog));
    printer.info("Listed", &plural(catalog.len(), "sprite", "sprites"));
    Ok(())
}

/// One line per sprite, in build order.
pub fn render_table(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|s| {
            let size = format!("{}x{}", s.width, s.height);
            format!("{:<24} {:<9} {}", s.name, size, s.kind.family())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::{Particle, SpriteKind, SpriteSpec};
    use crate::types::Colour;

    #[test]
    fn test_render_table() {
        let catalog = Catalog::new(vec![
            SpriteSpec::new(
                "heart_full",
                84,
                78,
                SpriteKind::Heart {
                    colour: Colour::rgb(220, 40, 40),
                    alpha: 255,
                },
            ),
            SpriteSpec::new("ditch_water_2", 512, 160, SpriteKind::DitchWater { frame: 2 }),
            SpriteSpec::new("particle_star", 16, 16, SpriteKind::Particle(Particle::Star)),
        ])
        .unwrap();

        insta::assert_snapshot!(render_table(&catalog), @r###"
        heart_full               84x78     ui
        ditch_water_2            512x160   environment
        particle_star            16x16     particle
        "###);
    }

    #[test]
    fn test_standard_table_has_row_per_sprite() {
        let catalog = Catalog::standard();
        assert_eq!(render_table(&catalog).lines().count(), catalog.len());
    }
}
