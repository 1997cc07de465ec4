//! Set of useful parser combinators

// internal modules
use crate::nuclide::{IsomerState, Nuclide};
use nukmed_format::capitalise;

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{alpha1, char, one_of};
use nom::combinator::{map, opt};
use nom::error::{Error, ErrorKind};
use nom::sequence::{pair, preceded};
use nom::{Err, IResult};

/// Parse a string into a [Nuclide]
///
/// Can be:
///     - Symbol first Tc-99m, Tc99m, tc_99m, Tc-99m2
///     - Mass number first 99mTc, 18F
///
/// Only the mass number first notation restricts the isomer tag to lower
/// case, otherwise 99Mo would be read as an excited "o".
pub(crate) fn nuclide_from_str(i: &str) -> IResult<&str, Nuclide> {
    alt((symbol_first, mass_first))(i)
}

/// <element><separator><mass number><isomer>
fn symbol_first(i: &str) -> IResult<&str, Nuclide> {
    let (i, symbol) = element(i)?;
    let (i, _) = opt(separator)(i)?;
    let (i, mass_number) = mass_number(i)?;
    let (i, state) = opt(isomer)(i)?;

    Ok((
        i,
        Nuclide {
            symbol: normalise_symbol(symbol),
            mass_number,
            state: state.unwrap_or_default(),
        },
    ))
}

/// <mass number><isomer><element>
fn mass_first(i: &str) -> IResult<&str, Nuclide> {
    let (i, mass_number) = mass_number(i)?;
    let (i, (state, symbol)) = alt((
        pair(prefix_isomer, element),
        map(element, |e| (IsomerState::Ground, e)),
    ))(i)?;

    Ok((
        i,
        Nuclide {
            symbol: normalise_symbol(symbol),
            mass_number,
            state,
        },
    ))
}

/// Get the element symbol, at most two letters
fn element(i: &str) -> IResult<&str, &str> {
    let (rest, element) = alpha1(i)?;

    if element.len() > 2 {
        Err(Err::Error(Error::new(i, ErrorKind::Fail)))
    } else {
        Ok((rest, element))
    }
}

/// Get the mass number as an unsigned integer value
fn mass_number(i: &str) -> IResult<&str, u16> {
    nom::character::complete::u16(i)
}

/// List of possible separators people may use
fn separator(i: &str) -> IResult<&str, char> {
    one_of("_- ")(i)
}

/// Isomer following the mass number, any case
fn isomer(i: &str) -> IResult<&str, IsomerState> {
    alt((
        map(preceded(one_of("mM"), nom::character::complete::u8), numbered),
        map(one_of("mM"), |_| IsomerState::Excited(1)),
        map(one_of("nN"), |_| IsomerState::Excited(2)),
    ))(i)
}

/// Isomer between the mass number and element, lower case only
fn prefix_isomer(i: &str) -> IResult<&str, IsomerState> {
    alt((
        map(preceded(char('m'), nom::character::complete::u8), numbered),
        map(char('m'), |_| IsomerState::Excited(1)),
        map(char('n'), |_| IsomerState::Excited(2)),
    ))(i)
}

fn numbered(number: u8) -> IsomerState {
    if number == 0 {
        IsomerState::Ground
    } else {
        IsomerState::Excited(number)
    }
}

fn normalise_symbol(symbol: &str) -> String {
    capitalise(&symbol.to_lowercase())
}
