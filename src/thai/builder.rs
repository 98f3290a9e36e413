//! Fallback syllable assembly for syllables no template covers, typically
//! because a tone mark sits in a position the template list does not
//! anticipate (ไม่, บ้า, ชื่อ) or because the onset is a cluster with a
//! plain vowel (ปลา, กว่า).

use crate::thai::orthography::{
    cluster_romanization, FINAL_CONSONANTS, INITIAL_CONSONANTS, THANTHAKHAT,
};
use crate::thai::syllable::ParsedSyllable;
use crate::thai::tone::{apply_tone, is_live, tone_of, vowel_is_long};

/// Vowel sound of a parsed syllable together with the consonant that
/// actually closes it. ย, ว and อ in the final slots often spell part of
/// the vowel rather than a final sound.
fn vowel_sound(syl: &ParsedSyllable) -> (&'static str, Option<char>) {
    let m1 = syl.medial1;
    let m2 = syl.medial2.as_str();
    let f1 = syl.final1;
    let f2 = syl.final2;
    let shortened = syl.silent.contains('็');

    match syl.leading_vowel {
        Some('เ') => {
            if m1 == Some('ี') && f1 == Some('ย') {
                if f2 == Some('ว') {
                    return ("iao", None);
                }
                return ("iia", f2);
            }
            if m1 == Some('ื') && f1 == Some('อ') {
                return ("ʉʉa", f2);
            }
            if m1 == Some('า') {
                if m2 == "ะ" {
                    return ("ɔ", f1);
                }
                return ("ao", f1);
            }
            if m1 == Some('ิ') {
                return ("əə", f1);
            }
            if f1 == Some('อ') && m1.is_none() {
                return ("əə", f2);
            }
            if f1 == Some('อ') && m1 == Some('ะ') {
                return ("ə", f2);
            }
            if shortened {
                return ("e", f1);
            }
            if m1 == Some('ะ') {
                return ("e", f1);
            }
            if m1.is_none() && f1 == Some('ย') {
                return ("əəi", f2);
            }
            if m1.is_none() && f1 == Some('ว') {
                return ("eeo", f2);
            }
            ("ee", f1)
        }
        Some('แ') => {
            if shortened || m1 == Some('ะ') {
                return ("ɛ", f1);
            }
            if m1.is_none() && f1 == Some('ว') {
                return ("ɛɛo", f2);
            }
            ("ɛɛ", f1)
        }
        Some('โ') => {
            if m1 == Some('ะ') {
                return ("o", f1);
            }
            if m1.is_none() && f1 == Some('ย') {
                return ("ooi", f2);
            }
            ("oo", f1)
        }
        Some('ไ') | Some('ใ') => {
            if f1 == Some('ย') {
                return ("ai", f2);
            }
            ("ai", f1)
        }
        _ => {
            if m1 == Some('ั') && f1 == Some('ว') {
                return ("ua", f2);
            }
            if m1 == Some('ิ') && f1 == Some('ว') {
                return ("io", f2);
            }
            if m1 == Some('า') && f1 == Some('ย') {
                return ("aai", f2);
            }
            if m1 == Some('า') && f1 == Some('ว') {
                return ("aao", f2);
            }
            match m1 {
                Some('า') => ("aa", f1),
                Some('ะ') | Some('ั') => ("a", f1),
                Some('ิ') => ("i", f1),
                Some('ี') => ("ii", f1),
                Some('ึ') => ("ʉ", f1),
                // อ after ื is a silent carrier: มือ, ชื่อ
                Some('ื') if f1 == Some('อ') => ("ʉʉ", f2),
                Some('ื') => ("ʉʉ", f1),
                Some('ุ') => ("u", f1),
                Some('ู') => ("uu", f1),
                Some('ำ') => ("am", f1),
                Some('ๅ') => ("aa", f1),
                None => {
                    if f1 == Some('อ') {
                        return ("ɔɔ", f2);
                    }
                    if f1 == Some('ว') {
                        if f2 == Some('ย') {
                            return ("uai", None);
                        }
                        return ("ua", f2);
                    }
                    if f1 == Some('ร') && f2.is_none() {
                        return ("ɔɔn", None);
                    }
                    if f1.is_none() {
                        return ("ɔɔ", None);
                    }
                    ("o", f1)
                }
                _ => ("", f1),
            }
        }
    }
}

/// Assemble the romanization of a parsed syllable: onset, vowel and final
/// sounds, then the tone diacritic.
pub fn build_syllable(syl: &ParsedSyllable) -> String {
    if syl.initial1.is_none()
        && syl.leading_vowel.is_none()
        && syl.medial1.is_none()
        && syl.final1.is_none()
    {
        return String::new();
    }

    let onset = match (syl.initial1, syl.initial2) {
        (Some(c1), Some(c2)) => match cluster_romanization(c1, c2) {
            Some(rom) => rom.to_string(),
            None if c2 == 'ร' => {
                format!("{}r", INITIAL_CONSONANTS.get(&c1).copied().unwrap_or(""))
            }
            None => INITIAL_CONSONANTS.get(&c1).copied().unwrap_or("").to_string(),
        },
        (Some(c1), None) => INITIAL_CONSONANTS.get(&c1).copied().unwrap_or("").to_string(),
        _ => String::new(),
    };

    let (vowel, closing) = vowel_sound(syl);
    let final_sound = if syl.silent.contains(THANTHAKHAT) {
        ""
    } else {
        closing.and_then(|f| FINAL_CONSONANTS.get(&f).copied()).unwrap_or("")
    };

    let tone = tone_of(
        syl.onset_tone_class(),
        is_live(final_sound, vowel),
        vowel_is_long(vowel),
        syl.tone_mark,
    );

    apply_tone(&format!("{}{}{}", onset, vowel, final_sound), tone)
}
