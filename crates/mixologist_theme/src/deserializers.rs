use gpui::{AbsoluteLength, DefiniteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

/// A length as written in a theme file, before it is turned into a gpui unit.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RawLength {
    Pixels(f32),
    Rems(f32),
    Percent(f32),
}

impl RawLength {
    fn parse(value: NumberOrString) -> Option<Self> {
        let string = match value {
            NumberOrString::Number(number) => return Some(RawLength::Pixels(number)),
            NumberOrString::String(string) => string,
        };
        let string = string.trim();

        if let Some(number) = string.strip_suffix("rem") {
            return number.trim().parse().ok().map(RawLength::Rems);
        }

        if let Some(number) = string.strip_suffix("px") {
            return number.trim().parse().ok().map(RawLength::Pixels);
        }

        if let Some(number) = string.strip_suffix('%') {
            return number.trim().parse().ok().map(RawLength::Percent);
        }

        None
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f32),
    String(String),
}

pub fn de_font_family<'de, D>(deserializer: D) -> Result<SmallVec<[SharedString; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(SharedString),
        Many(SmallVec<[SharedString; 2]>),
    }

    let family = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => SmallVec::from_iter([name]),
        OneOrMany::Many(names) => names,
    };

    if family.is_empty() {
        return Err(D::Error::custom("font family list can't be empty."));
    }

    Ok(family)
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match RawLength::parse(NumberOrString::deserialize(deserializer)?) {
        Some(RawLength::Pixels(value)) => Ok(px(value)),
        _ => Err(D::Error::custom("expected a number or a string ending with 'px'")),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match RawLength::parse(NumberOrString::deserialize(deserializer)?) {
        Some(RawLength::Pixels(value)) => Ok(AbsoluteLength::Pixels(px(value))),
        Some(RawLength::Rems(value)) => Ok(AbsoluteLength::Rems(rems(value))),
        _ => Err(D::Error::custom(
            "expected a number or a string ending with 'px' or 'rem'",
        )),
    }
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match RawLength::parse(NumberOrString::deserialize(deserializer)?) {
        Some(RawLength::Pixels(value)) => Ok(DefiniteLength::Absolute(AbsoluteLength::Pixels(
            px(value),
        ))),
        Some(RawLength::Rems(value)) => {
            Ok(DefiniteLength::Absolute(AbsoluteLength::Rems(rems(value))))
        }
        Some(RawLength::Percent(value)) => Ok(DefiniteLength::Fraction(value / 100.)),
        None => Err(D::Error::custom(
            "expected a number or a string ending with 'px', 'rem' or '%'",
        )),
    }
}
