//! The built-in named-color dictionaries.

use crate::{rgb, Color};

/// The 16 basic HTML colors.
pub(crate) const BASE: [(&str, Color); 16] = [
    ("Black", rgb!(0x00, 0x00, 0x00)),
    ("Silver", rgb!(0xc0, 0xc0, 0xc0)),
    ("Gray", rgb!(0x80, 0x80, 0x80)),
    ("White", rgb!(0xff, 0xff, 0xff)),
    ("Maroon", rgb!(0x80, 0x00, 0x00)),
    ("Red", rgb!(0xff, 0x00, 0x00)),
    ("Purple", rgb!(0x80, 0x00, 0x80)),
    ("Fuchsia", rgb!(0xff, 0x00, 0xff)),
    ("Green", rgb!(0x00, 0x80, 0x00)),
    ("Lime", rgb!(0x00, 0xff, 0x00)),
    ("Olive", rgb!(0x80, 0x80, 0x00)),
    ("Yellow", rgb!(0xff, 0xff, 0x00)),
    ("Navy", rgb!(0x00, 0x00, 0x80)),
    ("Blue", rgb!(0x00, 0x00, 0xff)),
    ("Teal", rgb!(0x00, 0x80, 0x80)),
    ("Aqua", rgb!(0x00, 0xff, 0xff)),
];

/// The 148 CSS named colors, including the `grey` spellings.
pub(crate) const CSS: [(&str, Color); 148] = [
    ("AliceBlue", rgb!(0xf0, 0xf8, 0xff)),
    ("AntiqueWhite", rgb!(0xfa, 0xeb, 0xd7)),
    ("Aqua", rgb!(0x00, 0xff, 0xff)),
    ("Aquamarine", rgb!(0x7f, 0xff, 0xd4)),
    ("Azure", rgb!(0xf0, 0xff, 0xff)),
    ("Beige", rgb!(0xf5, 0xf5, 0xdc)),
    ("Bisque", rgb!(0xff, 0xe4, 0xc4)),
    ("Black", rgb!(0x00, 0x00, 0x00)),
    ("BlanchedAlmond", rgb!(0xff, 0xeb, 0xcd)),
    ("Blue", rgb!(0x00, 0x00, 0xff)),
    ("BlueViolet", rgb!(0x8a, 0x2b, 0xe2)),
    ("Brown", rgb!(0xa5, 0x2a, 0x2a)),
    ("BurlyWood", rgb!(0xde, 0xb8, 0x87)),
    ("CadetBlue", rgb!(0x5f, 0x9e, 0xa0)),
    ("Chartreuse", rgb!(0x7f, 0xff, 0x00)),
    ("Chocolate", rgb!(0xd2, 0x69, 0x1e)),
    ("Coral", rgb!(0xff, 0x7f, 0x50)),
    ("CornflowerBlue", rgb!(0x64, 0x95, 0xed)),
    ("Cornsilk", rgb!(0xff, 0xf8, 0xdc)),
    ("Crimson", rgb!(0xdc, 0x14, 0x3c)),
    ("Cyan", rgb!(0x00, 0xff, 0xff)),
    ("DarkBlue", rgb!(0x00, 0x00, 0x8b)),
    ("DarkCyan", rgb!(0x00, 0x8b, 0x8b)),
    ("DarkGoldenRod", rgb!(0xb8, 0x86, 0x0b)),
    ("DarkGray", rgb!(0xa9, 0xa9, 0xa9)),
    ("DarkGreen", rgb!(0x00, 0x64, 0x00)),
    ("DarkGrey", rgb!(0xa9, 0xa9, 0xa9)),
    ("DarkKhaki", rgb!(0xbd, 0xb7, 0x6b)),
    ("DarkMagenta", rgb!(0x8b, 0x00, 0x8b)),
    ("DarkOliveGreen", rgb!(0x55, 0x6b, 0x2f)),
    ("DarkOrange", rgb!(0xff, 0x8c, 0x00)),
    ("DarkOrchid", rgb!(0x99, 0x32, 0xcc)),
    ("DarkRed", rgb!(0x8b, 0x00, 0x00)),
    ("DarkSalmon", rgb!(0xe9, 0x96, 0x7a)),
    ("DarkSeaGreen", rgb!(0x8f, 0xbc, 0x8f)),
    ("DarkSlateBlue", rgb!(0x48, 0x3d, 0x8b)),
    ("DarkSlateGray", rgb!(0x2f, 0x4f, 0x4f)),
    ("DarkSlateGrey", rgb!(0x2f, 0x4f, 0x4f)),
    ("DarkTurquoise", rgb!(0x00, 0xce, 0xd1)),
    ("DarkViolet", rgb!(0x94, 0x00, 0xd3)),
    ("DeepPink", rgb!(0xff, 0x14, 0x93)),
    ("DeepSkyBlue", rgb!(0x00, 0xbf, 0xff)),
    ("DimGray", rgb!(0x69, 0x69, 0x69)),
    ("DimGrey", rgb!(0x69, 0x69, 0x69)),
    ("DodgerBlue", rgb!(0x1e, 0x90, 0xff)),
    ("FireBrick", rgb!(0xb2, 0x22, 0x22)),
    ("FloralWhite", rgb!(0xff, 0xfa, 0xf0)),
    ("ForestGreen", rgb!(0x22, 0x8b, 0x22)),
    ("Fuchsia", rgb!(0xff, 0x00, 0xff)),
    ("Gainsboro", rgb!(0xdc, 0xdc, 0xdc)),
    ("GhostWhite", rgb!(0xf8, 0xf8, 0xff)),
    ("Gold", rgb!(0xff, 0xd7, 0x00)),
    ("GoldenRod", rgb!(0xda, 0xa5, 0x20)),
    ("Gray", rgb!(0x80, 0x80, 0x80)),
    ("Green", rgb!(0x00, 0x80, 0x00)),
    ("GreenYellow", rgb!(0xad, 0xff, 0x2f)),
    ("Grey", rgb!(0x80, 0x80, 0x80)),
    ("HoneyDew", rgb!(0xf0, 0xff, 0xf0)),
    ("HotPink", rgb!(0xff, 0x69, 0xb4)),
    ("IndianRed", rgb!(0xcd, 0x5c, 0x5c)),
    ("Indigo", rgb!(0x4b, 0x00, 0x82)),
    ("Ivory", rgb!(0xff, 0xff, 0xf0)),
    ("Khaki", rgb!(0xf0, 0xe6, 0x8c)),
    ("Lavender", rgb!(0xe6, 0xe6, 0xfa)),
    ("LavenderBlush", rgb!(0xff, 0xf0, 0xf5)),
    ("LawnGreen", rgb!(0x7c, 0xfc, 0x00)),
    ("LemonChiffon", rgb!(0xff, 0xfa, 0xcd)),
    ("LightBlue", rgb!(0xad, 0xd8, 0xe6)),
    ("LightCoral", rgb!(0xf0, 0x80, 0x80)),
    ("LightCyan", rgb!(0xe0, 0xff, 0xff)),
    ("LightGoldenRodYellow", rgb!(0xfa, 0xfa, 0xd2)),
    ("LightGray", rgb!(0xd3, 0xd3, 0xd3)),
    ("LightGreen", rgb!(0x90, 0xee, 0x90)),
    ("LightGrey", rgb!(0xd3, 0xd3, 0xd3)),
    ("LightPink", rgb!(0xff, 0xb6, 0xc1)),
    ("LightSalmon", rgb!(0xff, 0xa0, 0x7a)),
    ("LightSeaGreen", rgb!(0x20, 0xb2, 0xaa)),
    ("LightSkyBlue", rgb!(0x87, 0xce, 0xfa)),
    ("LightSlateGray", rgb!(0x77, 0x88, 0x99)),
    ("LightSlateGrey", rgb!(0x77, 0x88, 0x99)),
    ("LightSteelBlue", rgb!(0xb0, 0xc4, 0xde)),
    ("LightYellow", rgb!(0xff, 0xff, 0xe0)),
    ("Lime", rgb!(0x00, 0xff, 0x00)),
    ("LimeGreen", rgb!(0x32, 0xcd, 0x32)),
    ("Linen", rgb!(0xfa, 0xf0, 0xe6)),
    ("Magenta", rgb!(0xff, 0x00, 0xff)),
    ("Maroon", rgb!(0x80, 0x00, 0x00)),
    ("MediumAquaMarine", rgb!(0x66, 0xcd, 0xaa)),
    ("MediumBlue", rgb!(0x00, 0x00, 0xcd)),
    ("MediumOrchid", rgb!(0xba, 0x55, 0xd3)),
    ("MediumPurple", rgb!(0x93, 0x70, 0xdb)),
    ("MediumSeaGreen", rgb!(0x3c, 0xb3, 0x71)),
    ("MediumSlateBlue", rgb!(0x7b, 0x68, 0xee)),
    ("MediumSpringGreen", rgb!(0x00, 0xfa, 0x9a)),
    ("MediumTurquoise", rgb!(0x48, 0xd1, 0xcc)),
    ("MediumVioletRed", rgb!(0xc7, 0x15, 0x85)),
    ("MidnightBlue", rgb!(0x19, 0x19, 0x70)),
    ("MintCream", rgb!(0xf5, 0xff, 0xfa)),
    ("MistyRose", rgb!(0xff, 0xe4, 0xe1)),
    ("Moccasin", rgb!(0xff, 0xe4, 0xb5)),
    ("NavajoWhite", rgb!(0xff, 0xde, 0xad)),
    ("Navy", rgb!(0x00, 0x00, 0x80)),
    ("OldLace", rgb!(0xfd, 0xf5, 0xe6)),
    ("Olive", rgb!(0x80, 0x80, 0x00)),
    ("OliveDrab", rgb!(0x6b, 0x8e, 0x23)),
    ("Orange", rgb!(0xff, 0xa5, 0x00)),
    ("OrangeRed", rgb!(0xff, 0x45, 0x00)),
    ("Orchid", rgb!(0xda, 0x70, 0xd6)),
    ("PaleGoldenRod", rgb!(0xee, 0xe8, 0xaa)),
    ("PaleGreen", rgb!(0x98, 0xfb, 0x98)),
    ("PaleTurquoise", rgb!(0xaf, 0xee, 0xee)),
    ("PaleVioletRed", rgb!(0xdb, 0x70, 0x93)),
    ("PapayaWhip", rgb!(0xff, 0xef, 0xd5)),
    ("PeachPuff", rgb!(0xff, 0xda, 0xb9)),
    ("Peru", rgb!(0xcd, 0x85, 0x3f)),
    ("Pink", rgb!(0xff, 0xc0, 0xcb)),
    ("Plum", rgb!(0xdd, 0xa0, 0xdd)),
    ("PowderBlue", rgb!(0xb0, 0xe0, 0xe6)),
    ("Purple", rgb!(0x80, 0x00, 0x80)),
    ("RebeccaPurple", rgb!(0x66, 0x33, 0x99)),
    ("Red", rgb!(0xff, 0x00, 0x00)),
    ("RosyBrown", rgb!(0xbc, 0x8f, 0x8f)),
    ("RoyalBlue", rgb!(0x41, 0x69, 0xe1)),
    ("SaddleBrown", rgb!(0x8b, 0x45, 0x13)),
    ("Salmon", rgb!(0xfa, 0x80, 0x72)),
    ("SandyBrown", rgb!(0xf4, 0xa4, 0x60)),
    ("SeaGreen", rgb!(0x2e, 0x8b, 0x57)),
    ("SeaShell", rgb!(0xff, 0xf5, 0xee)),
    ("Sienna", rgb!(0xa0, 0x52, 0x2d)),
    ("Silver", rgb!(0xc0, 0xc0, 0xc0)),
    ("SkyBlue", rgb!(0x87, 0xce, 0xeb)),
    ("SlateBlue", rgb!(0x6a, 0x5a, 0xcd)),
    ("SlateGray", rgb!(0x70, 0x80, 0x90)),
    ("SlateGrey", rgb!(0x70, 0x80, 0x90)),
    ("Snow", rgb!(0xff, 0xfa, 0xfa)),
    ("SpringGreen", rgb!(0x00, 0xff, 0x7f)),
    ("SteelBlue", rgb!(0x46, 0x82, 0xb4)),
    ("Tan", rgb!(0xd2, 0xb4, 0x8c)),
    ("Teal", rgb!(0x00, 0x80, 0x80)),
    ("Thistle", rgb!(0xd8, 0xbf, 0xd8)),
    ("Tomato", rgb!(0xff, 0x63, 0x47)),
    ("Turquoise", rgb!(0x40, 0xe0, 0xd0)),
    ("Violet", rgb!(0xee, 0x82, 0xee)),
    ("Wheat", rgb!(0xf5, 0xde, 0xb3)),
    ("White", rgb!(0xff, 0xff, 0xff)),
    ("WhiteSmoke", rgb!(0xf5, 0xf5, 0xf5)),
    ("Yellow", rgb!(0xff, 0xff, 0x00)),
    ("YellowGreen", rgb!(0x9a, 0xcd, 0x32)),
];

/// The 48 crayons of the classic color picker.
pub(crate) const CRAYONS: [(&str, Color); 48] = [
    ("Cantaloupe", rgb!(0xff, 0xcc, 0x66)),
    ("Honeydew", rgb!(0xcc, 0xff, 0x66)),
    ("Spindrift", rgb!(0x66, 0xff, 0xcc)),
    ("Sky", rgb!(0x66, 0xcc, 0xff)),
    ("Lavender", rgb!(0xcc, 0x66, 0xff)),
    ("Carnation", rgb!(0xff, 0x6f, 0xcf)),
    ("Licorice", rgb!(0x00, 0x00, 0x00)),
    ("Snow", rgb!(0xff, 0xff, 0xff)),
    ("Salmon", rgb!(0xff, 0x66, 0x66)),
    ("Banana", rgb!(0xff, 0xff, 0x66)),
    ("Flora", rgb!(0x66, 0xff, 0x66)),
    ("Ice", rgb!(0x66, 0xff, 0xff)),
    ("Orchid", rgb!(0x66, 0x66, 0xff)),
    ("Bubblegum", rgb!(0xff, 0x66, 0xff)),
    ("Lead", rgb!(0x19, 0x19, 0x19)),
    ("Mercury", rgb!(0xe6, 0xe6, 0xe6)),
    ("Tangerine", rgb!(0xff, 0x80, 0x00)),
    ("Lime", rgb!(0x80, 0xff, 0x00)),
    ("Sea Foam", rgb!(0x00, 0xff, 0x80)),
    ("Aqua", rgb!(0x00, 0x80, 0xff)),
    ("Grape", rgb!(0x80, 0x00, 0xff)),
    ("Strawberry", rgb!(0xff, 0x00, 0x80)),
    ("Tungsten", rgb!(0x33, 0x33, 0x33)),
    ("Silver", rgb!(0xcc, 0xcc, 0xcc)),
    ("Maraschino", rgb!(0xff, 0x00, 0x00)),
    ("Lemon", rgb!(0xff, 0xff, 0x00)),
    ("Spring", rgb!(0x00, 0xff, 0x00)),
    ("Turquoise", rgb!(0x00, 0xff, 0xff)),
    ("Blueberry", rgb!(0x00, 0x00, 0xff)),
    ("Magenta", rgb!(0xff, 0x00, 0xff)),
    ("Iron", rgb!(0x4c, 0x4c, 0x4c)),
    ("Magnesium", rgb!(0xb3, 0xb3, 0xb3)),
    ("Mocha", rgb!(0x80, 0x40, 0x00)),
    ("Fern", rgb!(0x40, 0x80, 0x00)),
    ("Moss", rgb!(0x00, 0x80, 0x40)),
    ("Ocean", rgb!(0x00, 0x40, 0x80)),
    ("Eggplant", rgb!(0x40, 0x00, 0x80)),
    ("Maroon", rgb!(0x80, 0x00, 0x40)),
    ("Steel", rgb!(0x66, 0x66, 0x66)),
    ("Aluminum", rgb!(0x99, 0x99, 0x99)),
    ("Cayenne", rgb!(0x80, 0x00, 0x00)),
    ("Asparagus", rgb!(0x80, 0x80, 0x00)),
    ("Clover", rgb!(0x00, 0x80, 0x00)),
    ("Teal", rgb!(0x00, 0x80, 0x80)),
    ("Midnight", rgb!(0x00, 0x00, 0x80)),
    ("Plum", rgb!(0x80, 0x00, 0x80)),
    ("Tin", rgb!(0x7f, 0x7f, 0x7f)),
    ("Nickel", rgb!(0x80, 0x80, 0x80)),
];

/// The 15 standard colors of the system color panel.
pub(crate) const SYSTEM: [(&str, Color); 15] = [
    ("Black", Color::new(0.0, 0.0, 0.0, 1.0)),
    ("Blue", Color::new(0.0, 0.0, 1.0, 1.0)),
    ("Brown", Color::new(0.6, 0.4, 0.2, 1.0)),
    ("Clear", Color::new(0.0, 0.0, 0.0, 0.0)),
    ("Cyan", Color::new(0.0, 1.0, 1.0, 1.0)),
    ("Dark Gray", Color::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0)),
    ("Gray", Color::new(0.5, 0.5, 0.5, 1.0)),
    ("Green", Color::new(0.0, 1.0, 0.0, 1.0)),
    ("Light Gray", Color::new(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0)),
    ("Magenta", Color::new(1.0, 0.0, 1.0, 1.0)),
    ("Orange", Color::new(1.0, 0.5, 0.0, 1.0)),
    ("Purple", Color::new(0.5, 0.0, 0.5, 1.0)),
    ("Red", Color::new(1.0, 0.0, 0.0, 1.0)),
    ("White", Color::new(1.0, 1.0, 1.0, 1.0)),
    ("Yellow", Color::new(1.0, 1.0, 0.0, 1.0)),
];

/// The built-in dictionaries in registry order.
pub(crate) const DICTIONARIES: [(&str, &[(&str, Color)]); 4] = [
    ("Base", &BASE),
    ("CSS", &CSS),
    ("Crayons", &CRAYONS),
    ("System", &SYSTEM),
];
