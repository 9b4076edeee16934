//! Category Icons
//!
//! One small pixel-art character per result category, drawn in that
//! category's colors. The mapping from category to motif is a closed match,
//! so adding a category without an icon does not compile.

mod sprites;

use ratatui::style::Color;

use wizai_conductor::Category;

pub use sprites::{build_sprite, ColoredCell, Sprite};

const SKIN: Color = Color::Rgb(253, 224, 200);
const EYES: Color = Color::Rgb(30, 30, 40);
const WOOD: Color = Color::Rgb(146, 100, 60);
const WHITE: Color = Color::Rgb(241, 245, 249);

/// Visual motif for a result category
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryIcon {
    /// Wizard hat and staff
    WizardHat,
    /// Beret and paint brush
    Beret,
    /// Robot goggles and wrench
    RobotGoggles,
    /// Glasses and book
    Glasses,
    /// Spiky hair and headphones
    Headphones,
    /// Halo and heart
    Halo,
    /// Crown
    Crown,
}

impl CategoryIcon {
    /// The icon shown for `category`
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::A => Self::WizardHat,
            Category::B => Self::Beret,
            Category::C => Self::RobotGoggles,
            Category::D => Self::Glasses,
            Category::E => Self::Headphones,
            Category::F => Self::Halo,
            Category::G => Self::Crown,
        }
    }

    /// Short description of the motif
    pub const fn motif(self) -> &'static str {
        match self {
            Self::WizardHat => "wizard hat and staff",
            Self::Beret => "beret and brush",
            Self::RobotGoggles => "robot goggles and wrench",
            Self::Glasses => "glasses and book",
            Self::Headphones => "spiky hair and headphones",
            Self::Halo => "halo and heart",
            Self::Crown => "crown",
        }
    }

    /// Build the sprite for this icon
    pub fn sprite(self) -> Sprite {
        match self {
            Self::WizardHat => {
                const HAT: Color = Color::Rgb(34, 211, 238);
                const ROBE: Color = Color::Rgb(8, 145, 178);
                const BAND: Color = Color::Rgb(251, 191, 36);
                build_sprite(
                    &[
                        "     H    * ",
                        "    HHH   | ",
                        "   HHHHH  | ",
                        "  bbbbbbb | ",
                        "   fefef  | ",
                        "   fffff  | ",
                        "   rrrrr  | ",
                    ],
                    &[
                        ('H', '█', HAT),
                        ('b', '▀', BAND),
                        ('f', '█', SKIN),
                        ('e', '▪', EYES),
                        ('r', '█', ROBE),
                        ('*', '*', HAT),
                        ('|', '│', WOOD),
                    ],
                )
            }
            Self::Beret => {
                const BERET: Color = Color::Rgb(244, 114, 182);
                const PAINT: Color = Color::Rgb(244, 63, 94);
                build_sprite(
                    &[
                        "   BBBBB    ",
                        "  BBBBBBB   ",
                        "   fffff  o ",
                        "   fefef  / ",
                        "   fffff /  ",
                        "   wBwBw/   ",
                        "   BwBwB    ",
                    ],
                    &[
                        ('B', '█', BERET),
                        ('f', '█', SKIN),
                        ('e', '▪', EYES),
                        ('o', '●', PAINT),
                        ('/', '/', WOOD),
                        ('w', '█', WHITE),
                    ],
                )
            }
            Self::RobotGoggles => {
                const METAL: Color = Color::Rgb(148, 163, 184);
                const GLOW: Color = Color::Rgb(34, 211, 238);
                const WRENCH: Color = Color::Rgb(100, 116, 139);
                build_sprite(
                    &[
                        "    |  |    ",
                        "  MMMMMMMM  ",
                        "  MGGMMGGM  ",
                        "  MMMMMMMM  ",
                        "  M====MM  w",
                        "  MMMMMMMM w",
                        "    MMMM  ww",
                    ],
                    &[
                        ('|', '│', METAL),
                        ('M', '█', METAL),
                        ('G', '█', GLOW),
                        ('=', '▄', WRENCH),
                        ('w', '█', WRENCH),
                    ],
                )
            }
            Self::Glasses => {
                const HAIR: Color = Color::Rgb(55, 48, 107);
                const FRAME: Color = Color::Rgb(129, 140, 248);
                const BOOK: Color = Color::Rgb(79, 70, 229);
                build_sprite(
                    &[
                        "   hhhhh    ",
                        "  hhhhhhh   ",
                        "   O-f-O    ",
                        "   fffff    ",
                        "   f___f    ",
                        "  kkkkkkk   ",
                        "  kPPkPPk   ",
                    ],
                    &[
                        ('h', '█', HAIR),
                        ('O', 'O', FRAME),
                        ('-', '─', FRAME),
                        ('f', '█', SKIN),
                        ('_', '▁', EYES),
                        ('k', '█', BOOK),
                        ('P', '▆', WHITE),
                    ],
                )
            }
            Self::Headphones => {
                const HAIR: Color = Color::Rgb(192, 132, 252);
                const PHONES: Color = Color::Rgb(126, 34, 206);
                build_sprite(
                    &[
                        "  ^ ^ ^ ^   ",
                        "  SSSSSSS   ",
                        " PfffffffP  ",
                        " PfefffefP  ",
                        " Pfff~fffP  ",
                        "   fffff    ",
                        "  *     *   ",
                    ],
                    &[
                        ('^', '▲', HAIR),
                        ('S', '█', HAIR),
                        ('P', '█', PHONES),
                        ('f', '█', SKIN),
                        ('e', '▪', EYES),
                        ('~', '▂', EYES),
                        ('*', '*', HAIR),
                    ],
                )
            }
            Self::Halo => {
                const HALO: Color = Color::Rgb(251, 191, 36);
                const HEART: Color = Color::Rgb(52, 211, 153);
                build_sprite(
                    &[
                        "   ooooo    ",
                        "            ",
                        "   fffff    ",
                        "   fefef  hh",
                        "   ff~ff hhh",
                        "   fffff  h ",
                        "   wwwww    ",
                    ],
                    &[
                        ('o', '▄', HALO),
                        ('f', '█', SKIN),
                        ('e', '▪', EYES),
                        ('~', '▂', EYES),
                        ('h', '█', HEART),
                        ('w', '█', WHITE),
                    ],
                )
            }
            Self::Crown => {
                const GOLD: Color = Color::Rgb(251, 191, 36);
                const JEWEL: Color = Color::Rgb(251, 146, 60);
                build_sprite(
                    &[
                        "  Y  Y  Y   ",
                        "  YY YY YY  ",
                        "  YYYYYYYY  ",
                        "  YJYYYYJY  ",
                        "   fffff    ",
                        "   fefef    ",
                        "   fffff    ",
                    ],
                    &[
                        ('Y', '█', GOLD),
                        ('J', '◆', JEWEL),
                        ('f', '█', SKIN),
                        ('e', '▪', EYES),
                    ],
                )
            }
        }
    }
}
