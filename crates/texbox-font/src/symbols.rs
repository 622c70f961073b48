//! Symbol resolution: TeX symbol names and characters to Unicode codepoints.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::{FontError, FontResult};

/// Resolve a symbol to a Unicode codepoint.
///
/// A symbol is either a single character, which resolves to itself, or a
/// TeX command name such as `\alpha` (the leading backslash is optional).
/// In math mode a hyphen resolves to U+2212 MINUS SIGN, the preferred
/// representation of unary and binary minus.
///
/// # Example
///
/// ```
/// use texbox_font::symbols::unicode_index;
///
/// assert_eq!(unicode_index(r"\alpha", true).unwrap(), 'α');
/// assert_eq!(unicode_index("-", true).unwrap(), '\u{2212}');
/// assert_eq!(unicode_index("-", false).unwrap(), '-');
/// assert!(unicode_index(r"\nosuchsymbol", true).is_err());
/// ```
pub fn unicode_index(symbol: &str, math: bool) -> FontResult<char> {
    if math && symbol == "-" {
        return Ok('\u{2212}');
    }

    let mut chars = symbol.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(c);
    }

    let name = symbol.strip_prefix('\\').unwrap_or(symbol);
    tex_symbol(name).ok_or_else(|| FontError::UnknownSymbol {
        symbol: symbol.to_string(),
    })
}

/// Whether a symbol is drawn slanted whatever the requested style.
pub fn is_slanted(symbol: &str) -> bool {
    matches!(symbol, r"\int" | r"\oint")
}

/// Whether a codepoint is a Unicode letter (general category `L`).
///
/// Letter-like numbers (`Nl`), symbols (`So`, such as circled letters) and
/// combining marks are not letters, although `char::is_alphabetic` accepts
/// them.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Look up a TeX symbol name (without backslash).
fn tex_symbol(name: &str) -> Option<char> {
    let c = match name {
        // Greek, lowercase
        "alpha" => '\u{03B1}',
        "beta" => '\u{03B2}',
        "gamma" => '\u{03B3}',
        "delta" => '\u{03B4}',
        "epsilon" => '\u{03F5}',
        "varepsilon" => '\u{03B5}',
        "zeta" => '\u{03B6}',
        "eta" => '\u{03B7}',
        "theta" => '\u{03B8}',
        "vartheta" => '\u{03D1}',
        "iota" => '\u{03B9}',
        "kappa" => '\u{03BA}',
        "varkappa" => '\u{03F0}',
        "lambda" => '\u{03BB}',
        "mu" => '\u{03BC}',
        "nu" => '\u{03BD}',
        "xi" => '\u{03BE}',
        "omicron" => '\u{03BF}',
        "pi" => '\u{03C0}',
        "varpi" => '\u{03D6}',
        "rho" => '\u{03C1}',
        "varrho" => '\u{03F1}',
        "sigma" => '\u{03C3}',
        "varsigma" => '\u{03C2}',
        "tau" => '\u{03C4}',
        "upsilon" => '\u{03C5}',
        "phi" => '\u{03D5}',
        "varphi" => '\u{03C6}',
        "chi" => '\u{03C7}',
        "psi" => '\u{03C8}',
        "omega" => '\u{03C9}',
        "digamma" => '\u{03DD}',

        // Greek, uppercase
        "Gamma" => '\u{0393}',
        "Delta" => '\u{0394}',
        "Theta" => '\u{0398}',
        "Lambda" => '\u{039B}',
        "Xi" => '\u{039E}',
        "Pi" => '\u{03A0}',
        "Sigma" => '\u{03A3}',
        "Upsilon" => '\u{03A5}',
        "Phi" => '\u{03A6}',
        "Psi" => '\u{03A8}',
        "Omega" => '\u{03A9}',

        // Hebrew and letter-like
        "aleph" => '\u{2135}',
        "beth" => '\u{2136}',
        "gimel" => '\u{2137}',
        "daleth" => '\u{2138}',
        "hbar" => '\u{0127}',
        "hslash" => '\u{210F}',
        "ell" => '\u{2113}',
        "wp" => '\u{2118}',
        "Re" => '\u{211C}',
        "Im" => '\u{2111}',
        "mho" => '\u{2127}',
        "Finv" => '\u{2132}',
        "imath" => '\u{0131}',
        "jmath" => '\u{0237}',
        "partial" => '\u{2202}',
        "nabla" => '\u{2207}',

        // Big operators
        "sum" => '\u{2211}',
        "prod" => '\u{220F}',
        "coprod" => '\u{2210}',
        "int" => '\u{222B}',
        "iint" => '\u{222C}',
        "iiint" => '\u{222D}',
        "oint" => '\u{222E}',
        "oiint" => '\u{222F}',
        "oiiint" => '\u{2230}',
        "bigcap" => '\u{22C2}',
        "bigcup" => '\u{22C3}',
        "bigwedge" => '\u{22C0}',
        "bigvee" => '\u{22C1}',
        "bigodot" => '\u{2A00}',
        "bigoplus" => '\u{2A01}',
        "bigotimes" => '\u{2A02}',
        "biguplus" => '\u{2A04}',
        "bigsqcup" => '\u{2A06}',
        "__sqrt__" => '\u{221A}',
        "surd" => '\u{221A}',

        // Binary operators
        "pm" => '\u{00B1}',
        "mp" => '\u{2213}',
        "times" => '\u{00D7}',
        "div" => '\u{00F7}',
        "cdot" => '\u{22C5}',
        "ast" => '\u{2217}',
        "star" => '\u{22C6}',
        "circ" => '\u{2218}',
        "bullet" => '\u{2219}',
        "oplus" => '\u{2295}',
        "ominus" => '\u{2296}',
        "otimes" => '\u{2297}',
        "oslash" => '\u{2298}',
        "odot" => '\u{2299}',
        "cap" => '\u{2229}',
        "cup" => '\u{222A}',
        "wedge" | "land" => '\u{2227}',
        "vee" | "lor" => '\u{2228}',
        "setminus" => '\u{2216}',
        "sqcap" => '\u{2293}',
        "sqcup" => '\u{2294}',
        "uplus" => '\u{228E}',
        "wr" => '\u{2240}',
        "diamond" => '\u{22C4}',
        "bigtriangleup" => '\u{25B3}',
        "bigtriangledown" => '\u{25BD}',
        "triangleleft" => '\u{25C1}',
        "triangleright" => '\u{25B7}',
        "dagger" | "dag" => '\u{2020}',
        "ddagger" | "ddag" => '\u{2021}',
        "amalg" => '\u{2A3F}',

        // Relations
        "neq" | "ne" => '\u{2260}',
        "leq" | "le" => '\u{2264}',
        "geq" | "ge" => '\u{2265}',
        "ll" => '\u{226A}',
        "gg" => '\u{226B}',
        "equiv" => '\u{2261}',
        "sim" => '\u{223C}',
        "simeq" => '\u{2243}',
        "approx" => '\u{2248}',
        "cong" => '\u{2245}',
        "propto" => '\u{221D}',
        "asymp" => '\u{224D}',
        "doteq" => '\u{2250}',
        "prec" => '\u{227A}',
        "succ" => '\u{227B}',
        "preceq" => '\u{2AAF}',
        "succeq" => '\u{2AB0}',
        "subset" => '\u{2282}',
        "supset" => '\u{2283}',
        "subseteq" => '\u{2286}',
        "supseteq" => '\u{2287}',
        "sqsubseteq" => '\u{2291}',
        "sqsupseteq" => '\u{2292}',
        "in" => '\u{2208}',
        "ni" => '\u{220B}',
        "notin" => '\u{2209}',
        "mid" => '\u{2223}',
        "parallel" => '\u{2225}',
        "perp" => '\u{27C2}',
        "models" => '\u{22A7}',
        "vdash" => '\u{22A2}',
        "dashv" => '\u{22A3}',
        "bowtie" => '\u{22C8}',
        "Join" => '\u{2A1D}',
        "smile" => '\u{2323}',
        "frown" => '\u{2322}',

        // Arrows
        "leftarrow" | "gets" => '\u{2190}',
        "uparrow" => '\u{2191}',
        "rightarrow" | "to" => '\u{2192}',
        "downarrow" => '\u{2193}',
        "leftrightarrow" => '\u{2194}',
        "updownarrow" => '\u{2195}',
        "nwarrow" => '\u{2196}',
        "nearrow" => '\u{2197}',
        "searrow" => '\u{2198}',
        "swarrow" => '\u{2199}',
        "mapsto" => '\u{21A6}',
        "hookleftarrow" => '\u{21A9}',
        "hookrightarrow" => '\u{21AA}',
        "leftharpoonup" => '\u{21BC}',
        "leftharpoondown" => '\u{21BD}',
        "rightharpoonup" => '\u{21C0}',
        "rightharpoondown" => '\u{21C1}',
        "rightleftharpoons" => '\u{21CC}',
        "Leftarrow" => '\u{21D0}',
        "Uparrow" => '\u{21D1}',
        "Rightarrow" => '\u{21D2}',
        "Downarrow" => '\u{21D3}',
        "Leftrightarrow" => '\u{21D4}',
        "Updownarrow" => '\u{21D5}',
        "longleftarrow" => '\u{27F5}',
        "longrightarrow" => '\u{27F6}',
        "longleftrightarrow" => '\u{27F7}',
        "Longleftarrow" => '\u{27F8}',
        "Longrightarrow" => '\u{27F9}',
        "Longleftrightarrow" => '\u{27FA}',
        "longmapsto" => '\u{27FC}',

        // Delimiters
        "langle" => '\u{27E8}',
        "rangle" => '\u{27E9}',
        "lceil" => '\u{2308}',
        "rceil" => '\u{2309}',
        "lfloor" => '\u{230A}',
        "rfloor" => '\u{230B}',
        "lbrace" | "{" => '{',
        "rbrace" | "}" => '}',
        "vert" => '|',
        "Vert" | "|" => '\u{2016}',
        "backslash" => '\\',

        // Logic and sets
        "forall" => '\u{2200}',
        "complement" => '\u{2201}',
        "exists" => '\u{2203}',
        "nexists" => '\u{2204}',
        "emptyset" => '\u{2205}',
        "neg" | "lnot" => '\u{00AC}',
        "top" => '\u{22A4}',
        "bot" => '\u{22A5}',
        "therefore" => '\u{2234}',
        "because" => '\u{2235}',

        // Miscellaneous
        "infty" => '\u{221E}',
        "angle" => '\u{2220}',
        "measuredangle" => '\u{2221}',
        "triangle" => '\u{25B3}',
        "prime" => '\u{2032}',
        "degree" => '\u{00B0}',
        "ldots" | "dots" => '\u{2026}',
        "cdots" => '\u{22EF}',
        "vdots" => '\u{22EE}',
        "ddots" => '\u{22F1}',
        "clubsuit" => '\u{2663}',
        "diamondsuit" => '\u{2662}',
        "heartsuit" => '\u{2661}',
        "spadesuit" => '\u{2660}',
        "flat" => '\u{266D}',
        "natural" => '\u{266E}',
        "sharp" => '\u{266F}',
        "checkmark" => '\u{2713}',
        "square" => '\u{25A1}',
        "blacksquare" => '\u{25A0}',

        // Text symbols
        "S" => '\u{00A7}',
        "P" => '\u{00B6}',
        "copyright" => '\u{00A9}',
        "circledR" => '\u{00AE}',
        "pounds" => '\u{00A3}',
        "yen" => '\u{00A5}',
        "AA" => '\u{00C5}',
        "aa" => '\u{00E5}',
        "AE" => '\u{00C6}',
        "ae" => '\u{00E6}',
        "OE" => '\u{0152}',
        "oe" => '\u{0153}',
        "O" => '\u{00D8}',
        "o" => '\u{00F8}',
        "ss" => '\u{00DF}',
        "L" => '\u{0141}',
        "l" => '\u{0142}',
        "%" => '%',
        "$" => '$',
        "#" => '#',
        "&" => '&',
        "_" => '_',

        _ => return None,
    };
    Some(c)
}
