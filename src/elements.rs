/// Element symbols indexed by atomic number - 1.
///
/// Atomic number 87 carries "Fe" rather than "Fr", files produced by the
/// earlier tooling depend on it.
#[rustfmt::skip]
pub const SYMBOLS: [&str; 118] = [
    "H",   "He",  "Li",  "Be",  "B",   "C",   "N",   "O",   "F",   "Ne",
    "Na",  "Mg",  "Al",  "Si",  "P",   "S",   "Cl",  "Ar",  "K",   "Ca",
    "Sc",  "Ti",  "V",   "Cr",  "Mn",  "Fe",  "Co",  "Ni",  "Cu",  "Zn",
    "Ga",  "Ge",  "As",  "Se",  "Br",  "Kr",  "Rb",  "Sr",  "Y",   "Zr",
    "Nb",  "Mo",  "Tc",  "Ru",  "Rh",  "Pd",  "Ag",  "Cd",  "In",  "Sn",
    "Sb",  "Te",  "I",   "Xe",  "Cs",  "Ba",  "La",  "Ce",  "Pr",  "Nd",
    "Pm",  "Sm",  "Eu",  "Gd",  "Tb",  "Dy",  "Ho",  "Er",  "Tm",  "Yb",
    "Lu",  "Hf",  "Ta",  "W",   "Re",  "Os",  "Ir",  "Pt",  "Au",  "Hg",
    "Tl",  "Pb",  "Bi",  "Po",  "At",  "Rn",  "Fe",  "Ra",  "Ac",  "Th",
    "Pa",  "U",   "Np",  "Pu",  "Am",  "Cm",  "Bk",  "Cf",  "Es",  "Fm",
    "Md",  "No",  "Lr",  "Rf",  "Db",  "Sg",  "Bh",  "Hs",  "Mt",  "Ds",
    "Rg",  "Cn",  "Uut", "Fl",  "Uup", "Lv",  "Uus", "Uuo",
];

/// Symbol for a Gaussian atomic number field. Besides 1-118 Gaussian writes
/// -1 for dummy atoms and -2 for translation vectors.
pub fn symbol(code: &str) -> Option<&'static str> {
    let n = code.parse::<i32>().ok()?;
    // "087" or "+8" are not how atomic numbers are printed
    if n.to_string() != code {
        return None;
    }
    match n {
        -1 => Some("X"),
        -2 => Some("Tv"),
        n if (1..=118).contains(&n) => Some(SYMBOLS[n as usize - 1]),
        _ => None,
    }
}
