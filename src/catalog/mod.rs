//! Compiled-in gradient catalog
//!
//! Gradients from https://webgradients.com/. Order here is display order.

use crate::sanitize;

/// A named CSS gradient available for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientDefinition {
    pub name: &'static str,
    pub css: &'static str,
}

impl GradientDefinition {
    pub const fn new(name: &'static str, css: &'static str) -> Self {
        Self { name, css }
    }

    /// Persistence key derived from the display name.
    pub fn slug(&self) -> String {
        sanitize::title(self.name)
    }
}

/// Look up a catalog entry by its CSS value (the catalog's unique key).
pub fn find_by_css(css: &str) -> Option<&'static GradientDefinition> {
    CATALOG.iter().find(|g| g.css == css)
}

pub const CATALOG: &[GradientDefinition] = &[
    GradientDefinition::new(
        "Warm Flame",
        "linear-gradient(45deg, rgb(255,154,158) 0%, rgb(250,208,196) 99%, rgb(250,208,196) 100%)",
    ),
    GradientDefinition::new(
        "Night Fade",
        "linear-gradient(to top, rgb(161,140,209) 0%, rgb(251,194,235) 100%)",
    ),
    GradientDefinition::new(
        "Spring Warmth",
        "linear-gradient(to top, rgb(250,208,196) 0%, rgb(255,209,255) 100%)",
    ),
    GradientDefinition::new(
        "Juicy Peach",
        "linear-gradient(to right, rgb(255,236,210) 0%, rgb(252,182,159) 100%)",
    ),
    GradientDefinition::new(
        "Young Passion",
        "linear-gradient(to right, rgb(255,129,119) 0%, rgb(255,134,122) 0%, rgb(255,140,127) 21%, rgb(249,145,133) 52%, rgb(207,85,108) 78%, rgb(177,42,91) 100%)",
    ),
    GradientDefinition::new(
        "Lady Lips",
        "linear-gradient(to top, rgb(255,154,158) 0%, rgb(254,207,239) 99%, rgb(254,207,239) 100%)",
    ),
    GradientDefinition::new(
        "Sunny Morning",
        "linear-gradient(120deg, rgb(246,211,101) 0%, rgb(253,160,133) 100%)",
    ),
    GradientDefinition::new(
        "Rainy Ashville",
        "linear-gradient(to top, rgb(251,194,235) 0%, rgb(166,193,238) 100%)",
    ),
    GradientDefinition::new(
        "Frozen Dreams",
        "linear-gradient(to top, rgb(253,203,241) 0%, rgb(253,203,241) 1%, rgb(230,222,233) 100%)",
    ),
    GradientDefinition::new(
        "Winter Neva",
        "linear-gradient(120deg, rgb(161,196,253) 0%, rgb(194,233,251) 100%)",
    ),
    GradientDefinition::new(
        "Dusty Grass",
        "linear-gradient(120deg, rgb(212,252,121) 0%, rgb(150,230,161) 100%)",
    ),
    GradientDefinition::new(
        "Tempting Azure",
        "linear-gradient(120deg, rgb(132,250,176) 0%, rgb(143,211,244) 100%)",
    ),
    GradientDefinition::new(
        "Heavy Rain",
        "linear-gradient(to top, rgb(207,217,223) 0%, rgb(226,235,240) 100%)",
    ),
    GradientDefinition::new(
        "Amy Crisp",
        "linear-gradient(120deg, rgb(166,192,254) 0%, rgb(246,128,132) 100%)",
    ),
    GradientDefinition::new(
        "Mean Fruit",
        "linear-gradient(120deg, rgb(252,203,144) 0%, rgb(213,126,235) 100%)",
    ),
    GradientDefinition::new(
        "Deep Blue",
        "linear-gradient(120deg, rgb(224,195,252) 0%, rgb(142,197,252) 100%)",
    ),
    GradientDefinition::new(
        "Ripe Malinka",
        "linear-gradient(120deg, rgb(240,147,251) 0%, rgb(245,87,108) 100%)",
    ),
    GradientDefinition::new(
        "Cloudy Knoxville",
        "linear-gradient(120deg, rgb(253,251,251) 0%, rgb(235,237,238) 100%)",
    ),
    GradientDefinition::new(
        "Malibu Beach",
        "linear-gradient(to right, rgb(79,172,254) 0%, rgb(0,242,254) 100%)",
    ),
    GradientDefinition::new(
        "New Life",
        "linear-gradient(to right, rgb(67,233,123) 0%, rgb(56,249,215) 100%)",
    ),
    GradientDefinition::new(
        "True Sunset",
        "linear-gradient(to right, rgb(250,112,154) 0%, rgb(254,225,64) 100%)",
    ),
    GradientDefinition::new(
        "Morpheus Den",
        "linear-gradient(to top, rgb(48,207,208) 0%, rgb(51,8,103) 100%)",
    ),
    GradientDefinition::new(
        "Rare Wind",
        "linear-gradient(to top, rgb(168,237,234) 0%, rgb(254,214,227) 100%)",
    ),
    GradientDefinition::new(
        "Near Moon",
        "linear-gradient(to top, rgb(94,231,223) 0%, rgb(180,144,202) 100%)",
    ),
    GradientDefinition::new(
        "Wild Apple",
        "linear-gradient(to top, rgb(210,153,194) 0%, rgb(254,249,215) 100%)",
    ),
    GradientDefinition::new(
        "Saint Petersburg",
        "linear-gradient(135deg, rgb(245,247,250) 0%, rgb(195,207,226) 100%)",
    ),
    GradientDefinition::new(
        "Arielles Smile",
        "radial-gradient(circle 248px at center, rgb(22,217,227) 0%, rgb(48,199,236) 47%, rgb(70,174,247) 100%)",
    ),
    GradientDefinition::new(
        "Plum Plate",
        "linear-gradient(135deg, rgb(102,126,234) 0%, rgb(118,75,162) 100%)",
    ),
    GradientDefinition::new(
        "Everlasting Sky",
        "linear-gradient(135deg, rgb(253,252,251) 0%, rgb(226,209,195) 100%)",
    ),
    GradientDefinition::new(
        "Happy Fisher",
        "linear-gradient(120deg, rgb(137,247,254) 0%, rgb(102,166,255) 100%)",
    ),
    GradientDefinition::new(
        "Blessing",
        "linear-gradient(to top, rgb(253,219,146) 0%, rgb(209,253,255) 100%)",
    ),
    GradientDefinition::new(
        "Sharpeye Eagle",
        "linear-gradient(to top, rgb(152,144,227) 0%, rgb(177,244,207) 100%)",
    ),
    GradientDefinition::new(
        "Ladoga Bottom",
        "linear-gradient(to top, rgb(235,192,253) 0%, rgb(217,222,216) 100%)",
    ),
    GradientDefinition::new(
        "Lemon Gate",
        "linear-gradient(to top, rgb(150,251,196) 0%, rgb(249,245,134) 100%)",
    ),
    GradientDefinition::new(
        "Itmeo Branding",
        "linear-gradient(180deg, rgb(42,245,152) 0%, rgb(0,158,253) 100%)",
    ),
    GradientDefinition::new(
        "Zeus Miracle",
        "linear-gradient(to top, rgb(205,156,242) 0%, rgb(246,243,255) 100%)",
    ),
    GradientDefinition::new(
        "Old Hat",
        "linear-gradient(to right, rgb(228,175,203) 0%, rgb(184,203,184) 0%, rgb(184,203,184) 0%, rgb(226,197,139) 30%, rgb(194,206,156) 64%, rgb(126,219,220) 100%)",
    ),
    GradientDefinition::new(
        "Star Wine",
        "linear-gradient(to right, rgb(184,203,184) 0%, rgb(184,203,184) 0%, rgb(180,101,218) 0%, rgb(207,108,201) 33%, rgb(238,96,156) 66%, rgb(238,96,156) 100%)",
    ),
    GradientDefinition::new(
        "Deep Blue",
        "linear-gradient(to right, rgb(106,17,203) 0%, rgb(37,117,252) 100%)",
    ),
    GradientDefinition::new(
        "Happy Acid",
        "linear-gradient(to top, rgb(55,236,186) 0%, rgb(114,175,211) 100%)",
    ),
    GradientDefinition::new(
        "Awesome Pine",
        "linear-gradient(to top, rgb(235,187,167) 0%, rgb(207,199,248) 100%)",
    ),
    GradientDefinition::new(
        "New York",
        "linear-gradient(to top, rgb(255,241,235) 0%, rgb(172,224,249) 100%)",
    ),
    GradientDefinition::new(
        "Shy Rainbow",
        "linear-gradient(to right, rgb(238,162,162) 0%, rgb(187,193,191) 19%, rgb(87,198,225) 42%, rgb(180,159,218) 79%, rgb(122,197,216) 100%)",
    ),
    GradientDefinition::new(
        "Mixed Hopes",
        "linear-gradient(to top, rgb(196,113,245) 0%, rgb(250,113,205) 100%)",
    ),
    GradientDefinition::new(
        "Fly High",
        "linear-gradient(to top, rgb(72,198,239) 0%, rgb(111,134,214) 100%)",
    ),
    GradientDefinition::new(
        "Strong Bliss",
        "linear-gradient(to right, rgb(247,140,160) 0%, rgb(249,116,143) 19%, rgb(253,134,140) 60%, rgb(254,154,139) 100%)",
    ),
    GradientDefinition::new(
        "Fresh Milk",
        "linear-gradient(to top, rgb(254,173,166) 0%, rgb(245,239,239) 100%)",
    ),
    GradientDefinition::new(
        "Snow Again",
        "linear-gradient(to top, rgb(230,233,240) 0%, rgb(238,241,245) 100%)",
    ),
    GradientDefinition::new(
        "February Ink",
        "linear-gradient(to top, rgb(172,203,238) 0%, rgb(231,240,253) 100%)",
    ),
    GradientDefinition::new(
        "Kind Steel",
        "linear-gradient(-20deg, rgb(233,222,250) 0%, rgb(251,252,219) 100%)",
    ),
    GradientDefinition::new(
        "Soft Grass",
        "linear-gradient(to top, rgb(193,223,196) 0%, rgb(222,236,221) 100%)",
    ),
    GradientDefinition::new(
        "Grown Early",
        "linear-gradient(to top, rgb(11,163,96) 0%, rgb(60,186,146) 100%)",
    ),
    GradientDefinition::new(
        "Sharp Blues",
        "linear-gradient(to top, rgb(0,198,251) 0%, rgb(0,91,234) 100%)",
    ),
    GradientDefinition::new(
        "Shady Water",
        "linear-gradient(to right, rgb(116,235,213) 0%, rgb(159,172,230) 100%)",
    ),
    GradientDefinition::new(
        "Dirty Beauty",
        "linear-gradient(to top, rgb(106,133,182) 0%, rgb(186,200,224) 100%)",
    ),
    GradientDefinition::new(
        "Great Whale",
        "linear-gradient(to top, rgb(163,189,237) 0%, rgb(105,145,199) 100%)",
    ),
    GradientDefinition::new(
        "Teen Notebook",
        "linear-gradient(to top, rgb(151,149,240) 0%, rgb(251,200,212) 100%)",
    ),
    GradientDefinition::new(
        "Polite Rumors",
        "linear-gradient(to top, rgb(167,166,203) 0%, rgb(137,137,186) 52%, rgb(137,137,186) 100%)",
    ),
    GradientDefinition::new(
        "Sweet Period",
        "linear-gradient(to top, rgb(63,81,177) 0%, rgb(90,85,174) 13%, rgb(123,95,172) 25%, rgb(143,106,174) 38%, rgb(168,106,164) 50%, rgb(204,107,142) 62%, rgb(241,130,113) 75%, rgb(243,164,105) 87%, rgb(247,201,120) 100%)",
    ),
    GradientDefinition::new(
        "Wide Matrix",
        "linear-gradient(to top, rgb(252,197,228) 0%, rgb(253,163,75) 15%, rgb(255,120,130) 35%, rgb(200,105,158) 52%, rgb(112,70,170) 71%, rgb(12,29,184) 87%, rgb(2,15,117) 100%)",
    ),
    GradientDefinition::new(
        "Soft Cherish",
        "linear-gradient(to top, rgb(219,220,215) 0%, rgb(221,220,215) 24%, rgb(226,201,204) 30%, rgb(231,98,125) 46%, rgb(184,35,90) 59%, rgb(128,19,87) 71%, rgb(61,22,53) 84%, rgb(28,26,39) 100%)",
    ),
    GradientDefinition::new(
        "Red Salvation",
        "linear-gradient(to top, rgb(244,59,71) 0%, rgb(69,58,148) 100%)",
    ),
    GradientDefinition::new(
        "Burning Spring",
        "linear-gradient(to top, rgb(79,181,118) 0%, rgb(68,196,137) 30%, rgb(40,169,174) 46%, rgb(40,162,183) 59%, rgb(76,119,136) 71%, rgb(108,79,99) 86%, rgb(67,44,57) 100%)",
    ),
    GradientDefinition::new(
        "Night Party",
        "linear-gradient(to top, rgb(2,80,197) 0%, rgb(212,63,141) 100%)",
    ),
    GradientDefinition::new(
        "Sky Glider",
        "linear-gradient(to top, rgb(136,211,206) 0%, rgb(110,69,226) 100%)",
    ),
    GradientDefinition::new(
        "Heaven Peach",
        "linear-gradient(to top, rgb(217,175,217) 0%, rgb(151,217,225) 100%)",
    ),
    GradientDefinition::new(
        "Purple Division",
        "linear-gradient(to top, rgb(112,40,228) 0%, rgb(229,178,202) 100%)",
    ),
    GradientDefinition::new(
        "Aqua Splash",
        "linear-gradient(15deg, rgb(19,84,122) 0%, rgb(128,208,199) 100%)",
    ),
    GradientDefinition::new(
        "Spiky Naga",
        "linear-gradient(to top, rgb(80,82,133) 0%, rgb(88,94,146) 12%, rgb(101,104,159) 25%, rgb(116,116,176) 37%, rgb(126,126,187) 50%, rgb(131,137,199) 62%, rgb(151,149,212) 75%, rgb(162,161,220) 87%, rgb(181,174,228) 100%)",
    ),
    GradientDefinition::new(
        "Love Kiss",
        "linear-gradient(to top, rgb(255,8,68) 0%, rgb(255,177,153) 100%)",
    ),
    GradientDefinition::new(
        "Cochiti Lake",
        "linear-gradient(45deg, rgb(147,165,207) 0%, rgb(228,239,233) 100%)",
    ),
    GradientDefinition::new(
        "Premium Dark",
        "linear-gradient(to right, rgb(67,67,67) 0%, black 100%)",
    ),
    GradientDefinition::new(
        "Cold Evening",
        "linear-gradient(to top, rgb(12,52,131) 0%, rgb(162,182,223) 100%, rgb(107,140,206) 100%, rgb(162,182,223) 100%)",
    ),
    GradientDefinition::new(
        "Summer Games",
        "linear-gradient(to right, rgb(146,254,157) 0%, rgb(0,201,255) 100%)",
    ),
    GradientDefinition::new(
        "Passionate Bed",
        "linear-gradient(to right, rgb(255,117,140) 0%, rgb(255,126,179) 100%)",
    ),
    GradientDefinition::new(
        "Mountain Rock",
        "linear-gradient(to right, rgb(134,143,150) 0%, rgb(89,97,100) 100%)",
    ),
    GradientDefinition::new(
        "Desert Hump",
        "linear-gradient(to top, rgb(199,144,129) 0%, rgb(223,165,121) 100%)",
    ),
    GradientDefinition::new(
        "Jungle Day",
        "linear-gradient(45deg, rgb(139,170,170) 0%, rgb(174,139,156) 100%)",
    ),
    GradientDefinition::new(
        "Phoenix Start",
        "linear-gradient(to right, rgb(248,54,0) 0%, rgb(249,212,35) 100%)",
    ),
    GradientDefinition::new(
        "October Silence",
        "linear-gradient(-20deg, rgb(183,33,255) 0%, rgb(33,212,253) 100%)",
    ),
    GradientDefinition::new(
        "Faraway River",
        "linear-gradient(-20deg, rgb(110,69,226) 0%, rgb(136,211,206) 100%)",
    ),
    GradientDefinition::new(
        "Alchemist Lab",
        "linear-gradient(-20deg, rgb(213,88,200) 0%, rgb(36,210,146) 100%)",
    ),
    GradientDefinition::new(
        "Over Sun",
        "linear-gradient(60deg, rgb(171,236,214) 0%, rgb(251,237,150) 100%)",
    ),
    GradientDefinition::new(
        "Premium White",
        "linear-gradient(to top, rgb(213,212,208) 0%, rgb(213,212,208) 1%, rgb(238,238,236) 31%, rgb(239,238,236) 75%, rgb(233,233,231) 100%)",
    ),
    GradientDefinition::new(
        "Mars Party",
        "linear-gradient(to top, rgb(95,114,189) 0%, rgb(155,35,234) 100%)",
    ),
    GradientDefinition::new(
        "Eternal Constance",
        "linear-gradient(to top, rgb(9,32,63) 0%, rgb(83,120,149) 100%)",
    ),
    GradientDefinition::new(
        "Japan Blush",
        "linear-gradient(-20deg, rgb(221,214,243) 0%, rgb(250,172,168) 100%, rgb(250,172,168) 100%)",
    ),
    GradientDefinition::new(
        "Smiling Rain",
        "linear-gradient(-20deg, rgb(220,176,237) 0%, rgb(153,201,156) 100%)",
    ),
    GradientDefinition::new(
        "Cloudy Apple",
        "linear-gradient(to top, rgb(243,231,233) 0%, rgb(227,238,255) 99%, rgb(227,238,255) 100%)",
    ),
    GradientDefinition::new(
        "Big Mango",
        "linear-gradient(to top, rgb(199,29,111) 0%, rgb(208,150,147) 100%)",
    ),
    GradientDefinition::new(
        "Healthy Water",
        "linear-gradient(60deg, rgb(150,222,218) 0%, rgb(80,201,195) 100%)",
    ),
    GradientDefinition::new(
        "Amour Amour",
        "linear-gradient(to top, rgb(247,112,98) 0%, rgb(254,81,150) 100%)",
    ),
    GradientDefinition::new(
        "Risky Concrete",
        "linear-gradient(to top, rgb(196,197,199) 0%, rgb(220,221,223) 52%, rgb(235,235,235) 100%)",
    ),
    GradientDefinition::new(
        "Strong Stick",
        "linear-gradient(to right, rgb(168,202,186) 0%, rgb(93,65,87) 100%)",
    ),
    GradientDefinition::new(
        "Vicious Stance",
        "linear-gradient(60deg, rgb(41,50,60) 0%, rgb(72,85,99) 100%)",
    ),
    GradientDefinition::new(
        "Palo Alto",
        "linear-gradient(-60deg, rgb(22,160,133) 0%, rgb(244,208,63) 100%)",
    ),
    GradientDefinition::new(
        "Happy Memories",
        "linear-gradient(-60deg, rgb(255,88,88) 0%, rgb(240,152,25) 100%)",
    ),
    GradientDefinition::new(
        "Midnight Bloom",
        "linear-gradient(-20deg, rgb(43,88,118) 0%, rgb(78,67,118) 100%)",
    ),
    GradientDefinition::new(
        "Crystalline",
        "linear-gradient(-20deg, rgb(0,205,172) 0%, rgb(141,218,213) 100%)",
    ),
    GradientDefinition::new(
        "River City",
        "linear-gradient(to top, rgb(68,129,235) 0%, rgb(4,190,254) 100%)",
    ),
    GradientDefinition::new(
        "Confident Cloud",
        "linear-gradient(to top, rgb(218,212,236) 0%, rgb(218,212,236) 1%, rgb(243,231,233) 100%)",
    ),
    GradientDefinition::new(
        "Le Cocktail",
        "linear-gradient(45deg, rgb(135,77,162) 0%, rgb(196,58,48) 100%)",
    ),
    GradientDefinition::new(
        "Frozen Berry",
        "linear-gradient(to top, rgb(232,25,139) 0%, rgb(199,234,253) 100%)",
    ),
    GradientDefinition::new(
        "Child Care",
        "linear-gradient(-20deg, rgb(247,148,164) 0%, rgb(253,214,189) 100%)",
    ),
    GradientDefinition::new(
        "Flying Lemon",
        "linear-gradient(60deg, rgb(100,179,244) 0%, rgb(194,229,156) 100%)",
    ),
    GradientDefinition::new(
        "New Retrowave",
        "linear-gradient(to top, rgb(59,65,197) 0%, rgb(169,129,187) 49%, rgb(255,200,169) 100%)",
    ),
    GradientDefinition::new(
        "Hidden Jaguar",
        "linear-gradient(to top, rgb(15,216,80) 0%, rgb(249,240,71) 100%)",
    ),
    GradientDefinition::new(
        "Above The Sky",
        "linear-gradient(to top, lightgrey 0%, lightgrey 1%, rgb(224,224,224) 26%, rgb(239,239,239) 48%, rgb(217,217,217) 75%, rgb(188,188,188) 100%)",
    ),
    GradientDefinition::new(
        "Nega",
        "linear-gradient(45deg, rgb(238,156,167) 0%, rgb(255,221,225) 100%)",
    ),
    GradientDefinition::new(
        "Dense Water",
        "linear-gradient(to right, rgb(58,181,176) 0%, rgb(61,153,190) 31%, rgb(86,49,122) 100%)",
    ),
    GradientDefinition::new(
        "Seashore",
        "linear-gradient(to top, rgb(32,156,255) 0%, rgb(104,224,207) 100%)",
    ),
    GradientDefinition::new(
        "Marble Wall",
        "linear-gradient(to top, rgb(189,194,232) 0%, rgb(189,194,232) 1%, rgb(230,222,233) 100%)",
    ),
    GradientDefinition::new(
        "Cheerful Caramel",
        "linear-gradient(to top, rgb(230,185,128) 0%, rgb(234,205,163) 100%)",
    ),
    GradientDefinition::new(
        "Night Sky",
        "linear-gradient(to top, rgb(30,60,114) 0%, rgb(30,60,114) 1%, rgb(42,82,152) 100%)",
    ),
    GradientDefinition::new(
        "Magic Lake",
        "linear-gradient(to top, rgb(213,222,231) 0%, rgb(255,175,189) 0%, rgb(201,255,191) 100%)",
    ),
    GradientDefinition::new(
        "Young Grass",
        "linear-gradient(to top, rgb(155,225,93) 0%, rgb(0,227,174) 100%)",
    ),
    GradientDefinition::new(
        "Royal Garden",
        "linear-gradient(to right, rgb(237,110,160) 0%, rgb(236,140,105) 100%)",
    ),
    GradientDefinition::new(
        "Gentle Care",
        "linear-gradient(to right, rgb(255,195,160) 0%, rgb(255,175,189) 100%)",
    ),
    GradientDefinition::new(
        "Plum Bath",
        "linear-gradient(to top, rgb(204,32,142) 0%, rgb(103,19,210) 100%)",
    ),
    GradientDefinition::new(
        "Happy Unicorn",
        "linear-gradient(to top, rgb(179,255,171) 0%, rgb(18,255,247) 100%)",
    ),
    GradientDefinition::new(
        "African Field",
        "linear-gradient(-45deg, rgb(255,199,150) 0%, rgb(255,107,149) 100%)",
    ),
    GradientDefinition::new(
        "Solid Stone",
        "linear-gradient(to right, rgb(36,57,73) 0%, rgb(81,127,164) 100%)",
    ),
    GradientDefinition::new(
        "Orange Juice",
        "linear-gradient(-20deg, rgb(252,96,118) 0%, rgb(255,154,68) 100%)",
    ),
    GradientDefinition::new(
        "Glass Water",
        "linear-gradient(to top, rgb(223,233,243) 0%, white 100%)",
    ),
    GradientDefinition::new(
        "North Miracle",
        "linear-gradient(to right, rgb(0,219,222) 0%, rgb(252,0,255) 100%)",
    ),
    GradientDefinition::new(
        "Fruit Blend",
        "linear-gradient(to right, rgb(249,212,35) 0%, rgb(255,78,80) 100%)",
    ),
    GradientDefinition::new(
        "Millennium Pine",
        "linear-gradient(to top, rgb(80,204,127) 0%, rgb(245,209,0) 100%)",
    ),
    GradientDefinition::new(
        "High Flight",
        "linear-gradient(to right, rgb(10,207,254) 0%, rgb(73,90,255) 100%)",
    ),
    GradientDefinition::new(
        "Mole Hall",
        "linear-gradient(-20deg, rgb(97,97,97) 0%, rgb(155,197,195) 100%)",
    ),
    GradientDefinition::new(
        "Space Shift",
        "linear-gradient(60deg, rgb(61,51,147) 0%, rgb(43,118,185) 37%, rgb(44,172,209) 65%, rgb(53,235,147) 100%)",
    ),
    GradientDefinition::new(
        "Forest Inei",
        "linear-gradient(to top, rgb(223,137,181) 0%, rgb(191,217,254) 100%)",
    ),
    GradientDefinition::new(
        "Rich Metal",
        "linear-gradient(to right, rgb(215,210,204) 0%, rgb(48,67,82) 100%)",
    ),
    GradientDefinition::new(
        "Juicy Cake",
        "linear-gradient(to top, rgb(225,79,173) 0%, rgb(249,212,35) 100%)",
    ),
    GradientDefinition::new(
        "Smart Indigo",
        "linear-gradient(to top, rgb(178,36,239) 0%, rgb(117,121,255) 100%)",
    ),
    GradientDefinition::new(
        "Sand Strike",
        "linear-gradient(to right, rgb(193,193,97) 0%, rgb(193,193,97) 0%, rgb(212,212,177) 100%)",
    ),
    GradientDefinition::new(
        "Norse Beauty",
        "linear-gradient(to right, rgb(236,119,171) 0%, rgb(120,115,245) 100%)",
    ),
    GradientDefinition::new(
        "Aqua Guidance",
        "linear-gradient(to top, rgb(0,122,223) 0%, rgb(0,236,188) 100%)",
    ),
    GradientDefinition::new(
        "Sun Veggie",
        "linear-gradient(-225deg, rgb(32,226,215) 0%, rgb(249,254,165) 100%)",
    ),
    GradientDefinition::new(
        "Sea Lord",
        "linear-gradient(-225deg, rgb(44,216,213) 0%, rgb(197,193,255) 56%, rgb(255,186,195) 100%)",
    ),
    GradientDefinition::new(
        "Black Sea",
        "linear-gradient(-225deg, rgb(44,216,213) 0%, rgb(107,141,214) 48%, rgb(142,55,215) 100%)",
    ),
    GradientDefinition::new(
        "Grass Shampoo",
        "linear-gradient(-225deg, rgb(223,255,205) 0%, rgb(144,249,196) 48%, rgb(57,243,187) 100%)",
    ),
    GradientDefinition::new(
        "Landing Aircraft",
        "linear-gradient(-225deg, rgb(93,159,255) 0%, rgb(184,220,255) 48%, rgb(107,187,255) 100%)",
    ),
    GradientDefinition::new(
        "Witch Dance",
        "linear-gradient(-225deg, rgb(168,191,255) 0%, rgb(136,77,128) 100%)",
    ),
    GradientDefinition::new(
        "Sleepless Night",
        "linear-gradient(-225deg, rgb(82,113,196) 0%, rgb(177,159,255) 48%, rgb(236,161,254) 100%)",
    ),
    GradientDefinition::new(
        "Angel Care",
        "linear-gradient(-225deg, rgb(255,226,159) 0%, rgb(255,169,159) 48%, rgb(255,113,154) 100%)",
    ),
    GradientDefinition::new(
        "Crystal River",
        "linear-gradient(-225deg, rgb(34,225,255) 0%, rgb(29,143,225) 48%, rgb(98,94,177) 100%)",
    ),
    GradientDefinition::new(
        "Soft Lipstick",
        "linear-gradient(-225deg, rgb(182,206,232) 0%, rgb(245,120,220) 100%)",
    ),
    GradientDefinition::new(
        "Salt Mountain",
        "linear-gradient(-225deg, rgb(255,254,255) 0%, rgb(215,255,254) 100%)",
    ),
    GradientDefinition::new(
        "Perfect White",
        "linear-gradient(-225deg, rgb(227,253,245) 0%, rgb(255,230,250) 100%)",
    ),
    GradientDefinition::new(
        "Fresh Oasis",
        "linear-gradient(-225deg, rgb(125,226,252) 0%, rgb(185,182,229) 100%)",
    ),
    GradientDefinition::new(
        "Strict November",
        "linear-gradient(-225deg, rgb(203,186,204) 0%, rgb(37,128,179) 100%)",
    ),
    GradientDefinition::new(
        "Morning Salad",
        "linear-gradient(-225deg, rgb(183,248,219) 0%, rgb(80,167,194) 100%)",
    ),
    GradientDefinition::new(
        "Deep Relief",
        "linear-gradient(-225deg, rgb(112,133,182) 0%, rgb(135,167,217) 50%, rgb(222,243,248) 100%)",
    ),
    GradientDefinition::new(
        "Sea Strike",
        "linear-gradient(-225deg, rgb(119,255,210) 0%, rgb(98,151,219) 48%, rgb(30,236,255) 100%)",
    ),
    GradientDefinition::new(
        "Night Call",
        "linear-gradient(-225deg, rgb(172,50,228) 0%, rgb(121,24,242) 48%, rgb(72,1,255) 100%)",
    ),
    GradientDefinition::new(
        "Supreme Sky",
        "linear-gradient(-225deg, rgb(212,255,236) 0%, rgb(87,242,204) 48%, rgb(69,150,251) 100%)",
    ),
    GradientDefinition::new(
        "Light Blue",
        "linear-gradient(-225deg, rgb(158,251,211) 0%, rgb(87,233,242) 48%, rgb(69,212,251) 100%)",
    ),
    GradientDefinition::new(
        "Mind Crawl",
        "linear-gradient(-225deg, rgb(71,59,123) 0%, rgb(53,132,167) 51%, rgb(48,210,190) 100%)",
    ),
    GradientDefinition::new(
        "Lily Meadow",
        "linear-gradient(-225deg, rgb(101,55,155) 0%, rgb(136,106,234) 53%, rgb(100,87,198) 100%)",
    ),
    GradientDefinition::new(
        "Sugar Lollipop",
        "linear-gradient(-225deg, rgb(164,69,178) 0%, rgb(212,24,114) 52%, rgb(255,0,102) 100%)",
    ),
    GradientDefinition::new(
        "Sweet Dessert",
        "linear-gradient(-225deg, rgb(119,66,178) 0%, rgb(241,128,255) 52%, rgb(253,139,217) 100%)",
    ),
    GradientDefinition::new(
        "Magic Ray",
        "linear-gradient(-225deg, rgb(255,60,172) 0%, rgb(86,43,124) 52%, rgb(43,134,197) 100%)",
    ),
    GradientDefinition::new(
        "Teen Party",
        "linear-gradient(-225deg, rgb(255,5,124) 0%, rgb(141,11,147) 50%, rgb(50,21,117) 100%)",
    ),
    GradientDefinition::new(
        "Frozen Heat",
        "linear-gradient(-225deg, rgb(255,5,124) 0%, rgb(124,100,213) 48%, rgb(76,195,255) 100%)",
    ),
    GradientDefinition::new(
        "Gagarin View",
        "linear-gradient(-225deg, rgb(105,234,203) 0%, rgb(234,204,248) 48%, rgb(102,84,241) 100%)",
    ),
    GradientDefinition::new(
        "Fabled Sunset",
        "linear-gradient(-225deg, rgb(35,21,87) 0%, rgb(68,16,122) 29%, rgb(255,19,97) 67%, rgb(255,248,0) 100%)",
    ),
    GradientDefinition::new(
        "Perfect Blue",
        "linear-gradient(-225deg, rgb(61,78,129) 0%, rgb(87,83,201) 48%, rgb(110,127,243) 100%)",
    ),
];
