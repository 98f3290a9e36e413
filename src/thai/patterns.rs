//! Priority-ordered vowel-pattern templates.
//!
//! A template is a string of literal Thai code points plus three
//! placeholders: `K` (a two-consonant onset cluster), `C` (one consonant)
//! and `T` (an optional tone mark). The first placeholder is the onset;
//! later `C`s are finals. A template only matches when it consumes the
//! entire syllable, and the list is tried longest shape first, so e.g.
//! เCียว wins over เCียC for เขียว.
//!
//! In the Cระ/Cรา family the ร after the onset consonant rides along with
//! it (as a cluster entry when the pair has one, otherwise as a plain r),
//! while in the Cรร family the รร spells the vowel. The open Cระ form is a
//! reduced syllable: it comes out pre-toned as "à" and gains a trailing
//! "~" separator.

use lazy_static::lazy_static;
use unicode_normalization::UnicodeNormalization;

use crate::thai::orthography::{
    cluster_romanization, cluster_tone_class, is_consonant, is_tone_mark, tone_class, ToneClass,
    FINAL_CONSONANTS, INITIAL_CONSONANTS,
};
use crate::thai::tone::{apply_tone, is_live, tone_of, vowel_is_long};

struct Template {
    shape: &'static str,
    vowel: &'static str,
    /// Fold the literal ร after the onset into the onset sound.
    onset_r: bool,
    /// The vowel string already carries its tone; skip the calculator.
    pre_toned: bool,
    /// Reduced open syllable: append the "~" intra-word separator.
    reduced: bool,
}

const fn t(shape: &'static str, vowel: &'static str) -> Template {
    Template { shape, vowel, onset_r: false, pre_toned: false, reduced: false }
}

const fn tr(shape: &'static str, vowel: &'static str) -> Template {
    Template { shape, vowel, onset_r: true, pre_toned: false, reduced: false }
}

const fn ta(shape: &'static str, vowel: &'static str, reduced: bool) -> Template {
    Template { shape, vowel, onset_r: true, pre_toned: true, reduced }
}

/// The template inventory in priority order. Shapes of equal length keep
/// this order under the stable length sort.
static TEMPLATES: &[Template] = &[
    t("เKียวC", "iao"),
    t("เCียวC", "iao"),
    t("เKือยC", "ʉʉai"),
    t("เCือยC", "ʉʉai"),
    t("เKียว", "iao"),
    t("เCียว", "iao"),
    t("เKือC", "ʉʉa"),
    t("เCือC", "ʉʉa"),
    t("เKียC", "iia"),
    t("เCียC", "iia"),
    t("เKิTC", "əə"),
    t("เCิTC", "əə"),
    t("เKีย", "iia"),
    t("เCีย", "iia"),
    t("เKือ", "ʉʉa"),
    t("เCือ", "ʉʉa"),
    t("เKาะ", "ɔ"),
    t("เCาะ", "ɔ"),
    t("เKอะ", "ə"),
    t("เCอะ", "ə"),
    t("เKิC", "əə"),
    t("เCิC", "əə"),
    t("เKาC", "ao"),
    t("เCาC", "ao"),
    t("KัวC", "ua"),
    t("CัวC", "ua"),
    t("Kาย", "aai"),
    t("Cาย", "aai"),
    t("Kาว", "aao"),
    t("Cาว", "aao"),
    t("แK็C", "ɛ"),
    t("แC็C", "ɛ"),
    t("แKCC", "ɛɛ"),
    t("โKCC", "oo"),
    t("KรรC", "a"),
    t("CรรC", "a"),
    ta("KระC", "à", false),
    ta("CระC", "à", false),
    ta("Kระ", "à", true),
    ta("Cระ", "à", true),
    tr("KราC", "aa"),
    tr("CราC", "aa"),
    tr("Kรา", "aa"),
    tr("Cรา", "aa"),
    t("เKอ", "əə"),
    t("เCอ", "əə"),
    t("เKา", "ao"),
    t("เCา", "ao"),
    t("เKย", "əəi"),
    t("เCย", "əəi"),
    t("เKว", "eeo"),
    t("เCว", "eeo"),
    t("เK็C", "e"),
    t("เC็C", "e"),
    t("เKC", "ee"),
    t("เCC", "ee"),
    t("แKะ", "ɛ"),
    t("แCะ", "ɛ"),
    t("แKC", "ɛɛ"),
    t("แCC", "ɛɛ"),
    t("แKว", "ɛɛo"),
    t("แCว", "ɛɛo"),
    t("โKะ", "o"),
    t("โCะ", "o"),
    t("โKC", "oo"),
    t("โCC", "oo"),
    t("โKย", "ooi"),
    t("โCย", "ooi"),
    t("ไKย", "ai"),
    t("ไCย", "ai"),
    t("ใKย", "ai"),
    t("ใCย", "ai"),
    t("Kัว", "ua"),
    t("Cัว", "ua"),
    t("Kวย", "uai"),
    t("Cวย", "uai"),
    t("Kรร", "an"),
    t("Cรร", "an"),
    t("CัTC", "a"),
    t("CาTC", "aa"),
    t("CิTC", "i"),
    t("CีTC", "ii"),
    t("CึTC", "ʉ"),
    t("CืC", "ʉʉ"),
    t("CุTC", "u"),
    t("CูTC", "uu"),
    t("CTอC", "ɔɔ"),
    t("CอTC", "ɔɔ"),
    t("CอC", "ɔɔ"),
    t("C็อC", "ɔ"),
    t("Cะ", "a"),
    t("Cา", "aa"),
    t("Cำ", "am"),
    t("Cอ", "ɔɔ"),
    t("Cร", "ɔɔn"),
    t("CC", "o"),
    t("C", "ɔɔ"),
];

/// Matching weight of a shape: K spans two code points.
fn shape_len(shape: &str) -> usize {
    shape.chars().map(|c| if c == 'K' { 2 } else { 1 }).sum()
}

lazy_static! {
    /// Templates sorted once, longest shape first; equal lengths keep the
    /// declaration order (the sort is stable).
    static ref ORDERED: Vec<&'static Template> = {
        let mut v: Vec<&'static Template> = TEMPLATES.iter().collect();
        v.sort_by(|a, b| shape_len(b.shape).cmp(&shape_len(a.shape)));
        v
    };
}

struct Captures {
    onset1: char,
    onset2: Option<char>,
    tone_mark: Option<char>,
    first_final: Option<char>,
}

fn try_match(template: &Template, chars: &[char]) -> Option<Captures> {
    let mut i = 0;
    let mut onset1: Option<char> = None;
    let mut onset2: Option<char> = None;
    let mut tone_mark: Option<char> = None;
    let mut first_final: Option<char> = None;

    for tc in template.shape.chars() {
        match tc {
            'K' => {
                if i + 1 >= chars.len() || onset1.is_some() {
                    return None;
                }
                let (c1, c2) = (chars[i], chars[i + 1]);
                if !is_consonant(c1) || !is_consonant(c2) {
                    return None;
                }
                cluster_romanization(c1, c2)?;
                onset1 = Some(c1);
                onset2 = Some(c2);
                i += 2;
            }
            'C' => {
                if i >= chars.len() || !is_consonant(chars[i]) {
                    return None;
                }
                if onset1.is_none() {
                    onset1 = Some(chars[i]);
                } else if first_final.is_none() {
                    first_final = Some(chars[i]);
                }
                i += 1;
            }
            'T' => {
                if i < chars.len() && is_tone_mark(chars[i]) {
                    tone_mark = Some(chars[i]);
                    i += 1;
                }
            }
            lit => {
                if i >= chars.len() || chars[i] != lit {
                    return None;
                }
                i += 1;
            }
        }
    }

    if i != chars.len() {
        return None;
    }
    Some(Captures { onset1: onset1?, onset2, tone_mark, first_final })
}

/// Onset romanization and tone class for a capture, honoring the Cร fold.
fn onset_sound(template: &Template, caps: &Captures) -> (String, ToneClass) {
    let c1 = caps.onset1;
    match caps.onset2 {
        Some(c2) => {
            let rom = cluster_romanization(c1, c2).unwrap_or_default();
            let class = cluster_tone_class(c1, c2);
            if template.onset_r {
                (format!("{}r", rom), class)
            } else {
                (rom.to_string(), class)
            }
        }
        None => {
            if template.onset_r {
                match cluster_romanization(c1, 'ร') {
                    Some(rom) => (rom.to_string(), cluster_tone_class(c1, 'ร')),
                    None => {
                        let rom = INITIAL_CONSONANTS.get(&c1).copied().unwrap_or("");
                        (format!("{}r", rom), tone_class(c1))
                    }
                }
            } else {
                let rom = INITIAL_CONSONANTS.get(&c1).copied().unwrap_or("");
                (rom.to_string(), tone_class(c1))
            }
        }
    }
}

/// Try every template against a cleaned syllable; the first full-length
/// match yields the complete romanization, tone applied.
pub fn match_syllable(syllable: &str) -> Option<String> {
    let chars: Vec<char> = syllable.chars().collect();
    if chars.is_empty() {
        return None;
    }

    for template in ORDERED.iter() {
        let caps = match try_match(template, &chars) {
            Some(c) => c,
            None => continue,
        };

        let (onset, class) = onset_sound(template, &caps);
        let final_sound = caps
            .first_final
            .and_then(|f| FINAL_CONSONANTS.get(&f).copied())
            .unwrap_or("");

        let body = format!("{}{}{}", onset, template.vowel, final_sound);
        if template.pre_toned {
            let mut out: String = body.nfc().collect();
            if template.reduced {
                out.push('~');
            }
            return Some(out);
        }

        let tone = tone_of(
            class,
            is_live(final_sound, template.vowel),
            vowel_is_long(template.vowel),
            caps.tone_mark,
        );
        return Some(apply_tone(&body, tone));
    }

    None
}
