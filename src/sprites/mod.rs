//! Procedural sprite generators and the sprite catalog.
//!
//! Every sprite is described by a [`SpriteSpec`]: a name, its @3x export size
//! and a [`SpriteKind`] carrying the generator's parameters. The kind picks
//! both the generator function and the seed for a fresh [`SpriteRng`], so a
//! sprite renders to the same pixels every time.
//!
//! Every generator takes `(c: &mut dyn Surface, s: i32, rng: &mut SpriteRng)`
//! followed by whatever parameters its [`SpriteKind`] carries. Generators
//! that need no randomness still take the stream and ignore it. Dimensions
//! are written as `literal * s`, where `s` is the supersample factor.

mod characters;
mod paint;
mod particles;
mod rng;
mod sky;
mod structures;
mod terrain;
mod ui;

use std::collections::HashSet;
use std::fmt;

use crate::canvas::Surface;
use crate::error::{DitchError, Result};
use crate::types::Colour;

pub use particles::Particle;
pub use rng::SpriteRng;
pub use terrain::{wave_phase, wave_row, WAVE_PHASE_STEP};

/// Which generator draws a sprite, and with what parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteKind {
    CowWalk { variant: u32 },
    CowDrowning,
    Farmer,
    BackgroundGrass,
    SafePasture,
    DitchWater { frame: u32 },
    DitchEdge,
    FencePost,
    FenceRail,
    GateDoor,
    GatePost,
    Cloud { variant: u32 },
    TitleLogo,
    Button { label: &'static str, colour: Colour },
    Heart { colour: Colour, alpha: u8 },
    ScoreBadge,
    GameOverBanner,
    GateIndicator { colour: Colour },
    Particle(Particle),
}

impl SpriteKind {
    /// Seed for this sprite's random stream.
    pub fn seed(&self) -> u64 {
        match *self {
            SpriteKind::CowWalk { variant } => u64::from(variant) * 42,
            SpriteKind::CowDrowning => 99,
            SpriteKind::BackgroundGrass => 7,
            SpriteKind::SafePasture => 13,
            SpriteKind::DitchWater { frame } => u64::from(frame) * 100,
            SpriteKind::DitchEdge => 55,
            SpriteKind::FencePost => 22,
            SpriteKind::FenceRail => 33,
            SpriteKind::GatePost => 44,
            SpriteKind::Cloud { variant } => u64::from(variant) * 77,
            _ => 0,
        }
    }

    /// Run the generator at scale `s`.
    pub fn draw(&self, c: &mut dyn Surface, s: i32, rng: &mut SpriteRng) {
        match *self {
            SpriteKind::CowWalk { .. } => characters::cow_walk(c, s, rng),
            SpriteKind::CowDrowning => characters::cow_drowning(c, s, rng),
            SpriteKind::Farmer => characters::farmer(c, s, rng),
            SpriteKind::BackgroundGrass => terrain::background_grass(c, s, rng),
            SpriteKind::SafePasture => terrain::safe_pasture(c, s, rng),
            SpriteKind::DitchWater { frame } => terrain::ditch_water(c, s, rng, frame),
            SpriteKind::DitchEdge => terrain::ditch_edge(c, s, rng),
            SpriteKind::FencePost => structures::fence_post(c, s, rng),
            SpriteKind::FenceRail => structures::fence_rail(c, s, rng),
            SpriteKind::GateDoor => structures::gate_door(c, s, rng),
            SpriteKind::GatePost => structures::gate_post(c, s, rng),
            SpriteKind::Cloud { variant } => sky::cloud(c, s, rng, variant),
            SpriteKind::TitleLogo => ui::title_logo(c, s, rng),
            SpriteKind::Button { label, colour } => ui::button(c, s, rng, label, colour),
            SpriteKind::Heart { colour, alpha } => ui::heart(c, s, rng, colour, alpha),
            SpriteKind::ScoreBadge => ui::score_badge(c, s, rng),
            SpriteKind::GameOverBanner => ui::game_over_banner(c, s, rng),
            SpriteKind::GateIndicator { colour } => ui::gate_indicator(c, s, rng, colour),
            SpriteKind::Particle(particle) => particle.draw(c, s, rng),
        }
    }

    /// Family name shown by `ditchgen list`.
    pub fn family(&self) -> &'static str {
        match self {
            SpriteKind::CowWalk { .. } | SpriteKind::CowDrowning | SpriteKind::Farmer => {
                "character"
            }
            SpriteKind::BackgroundGrass
            | SpriteKind::SafePasture
            | SpriteKind::DitchWater { .. }
            | SpriteKind::DitchEdge => "environment",
            SpriteKind::FencePost
            | SpriteKind::FenceRail
            | SpriteKind::GateDoor
            | SpriteKind::GatePost => "structure",
            SpriteKind::Cloud { .. } => "sky",
            SpriteKind::Particle(_) => "particle",
            _ => "ui",
        }
    }
}

/// A named sprite with its @3x export size.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub kind: SpriteKind,
}

impl SpriteSpec {
    pub fn new(name: impl Into<String>, width: u32, height: u32, kind: SpriteKind) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            kind,
        }
    }

    pub fn seed(&self) -> u64 {
        self.kind.seed()
    }
}

impl fmt::Display for SpriteSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.width, self.height)
    }
}

/// Ordered, validated set of sprites to build.
#[derive(Debug, Clone)]
pub struct Catalog {
    sprites: Vec<SpriteSpec>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and empty sizes.
    pub fn new(sprites: Vec<SpriteSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for sprite in &sprites {
            if !seen.insert(sprite.name.as_str()) {
                return Err(DitchError::Config {
                    message: format!("duplicate sprite name '{}'", sprite.name),
                    help: None,
                });
            }
            if sprite.width == 0 || sprite.height == 0 {
                return Err(DitchError::Config {
                    message: format!("sprite '{}' has an empty size", sprite.name),
                    help: None,
                });
            }
        }
        Ok(Self { sprites })
    }

    /// The full game asset set.
    pub fn standard() -> Self {
        Self {
            sprites: standard_sprites(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SpriteSpec> {
        self.sprites.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpriteSpec> {
        self.sprites.iter()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Narrow to the named sprites, keeping catalog order.
    ///
    /// `None` selects everything. Unknown names are an error.
    pub fn select(&self, only: Option<&[String]>) -> Result<Vec<&SpriteSpec>> {
        let Some(names) = only else {
            return Ok(self.sprites.iter().collect());
        };

        let unknown: Vec<&str> = names
            .iter()
            .map(String::as_str)
            .filter(|name| self.get(name).is_none())
            .collect();
        if !unknown.is_empty() {
            return Err(DitchError::Config {
                message: format!("unknown sprite(s): {}", unknown.join(", ")),
                help: Some("Run 'ditchgen list' to see available sprites".to_string()),
            });
        }

        Ok(self
            .sprites
            .iter()
            .filter(|s| names.iter().any(|n| *n == s.name))
            .collect())
    }
}

fn standard_sprites() -> Vec<SpriteSpec> {
    let mut sprites = vec![];

    for variant in 1..=2 {
        sprites.push(SpriteSpec::new(
            format!("cow_walk_{variant}"),
            156,
            132,
            SpriteKind::CowWalk { variant },
        ));
    }
    sprites.push(SpriteSpec::new("cow_drowning", 156, 108, SpriteKind::CowDrowning));
    sprites.push(SpriteSpec::new("farmer", 180, 216, SpriteKind::Farmer));

    sprites.push(SpriteSpec::new("background_grass", 512, 512, SpriteKind::BackgroundGrass));
    sprites.push(SpriteSpec::new("safe_pasture", 512, 512, SpriteKind::SafePasture));
    for frame in 1..=3 {
        sprites.push(SpriteSpec::new(
            format!("ditch_water_{frame}"),
            512,
            160,
            SpriteKind::DitchWater { frame },
        ));
    }
    sprites.push(SpriteSpec::new("ditch_edge", 512, 24, SpriteKind::DitchEdge));

    sprites.push(SpriteSpec::new("fence_post", 24, 120, SpriteKind::FencePost));
    sprites.push(SpriteSpec::new("fence_rail", 512, 18, SpriteKind::FenceRail));
    sprites.push(SpriteSpec::new("gate_door", 240, 108, SpriteKind::GateDoor));
    sprites.push(SpriteSpec::new("gate_post", 36, 144, SpriteKind::GatePost));

    for variant in 1..=3 {
        sprites.push(SpriteSpec::new(
            format!("cloud_{variant}"),
            240,
            120,
            SpriteKind::Cloud { variant },
        ));
    }

    sprites.push(SpriteSpec::new("title_logo", 900, 240, SpriteKind::TitleLogo));
    sprites.push(SpriteSpec::new(
        "button_play",
        600,
        180,
        SpriteKind::Button {
            label: "PLAY",
            colour: Colour::rgb(60, 180, 60),
        },
    ));
    sprites.push(SpriteSpec::new(
        "button_replay",
        600,
        180,
        SpriteKind::Button {
            label: "PLAY AGAIN",
            colour: Colour::rgb(60, 160, 60),
        },
    ));
    sprites.push(SpriteSpec::new(
        "heart_full",
        84,
        78,
        SpriteKind::Heart {
            colour: Colour::rgb(220, 40, 40),
            alpha: 255,
        },
    ));
    sprites.push(SpriteSpec::new(
        "heart_empty",
        84,
        78,
        SpriteKind::Heart {
            colour: Colour::rgb(120, 120, 120),
            alpha: 100,
        },
    ));
    sprites.push(SpriteSpec::new("score_badge", 480, 120, SpriteKind::ScoreBadge));
    sprites.push(SpriteSpec::new("game_over_banner", 900, 240, SpriteKind::GameOverBanner));
    sprites.push(SpriteSpec::new(
        "gate_indicator_open",
        48,
        48,
        SpriteKind::GateIndicator {
            colour: Colour::rgb(40, 200, 40),
        },
    ));
    sprites.push(SpriteSpec::new(
        "gate_indicator_closed",
        48,
        48,
        SpriteKind::GateIndicator {
            colour: Colour::rgb(200, 40, 40),
        },
    ));

    for particle in Particle::ALL {
        let size = particle.size();
        sprites.push(SpriteSpec::new(particle.name(), size, size, SpriteKind::Particle(particle)));
    }

    sprites
}
