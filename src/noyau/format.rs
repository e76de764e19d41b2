// src/noyau/format.rs
//
// Affichage canonique d’un résultat :
//   f64 -> développement décimal EXACT (BigRational) -> arrondi à 10 décimales
//       -> retour en f64 -> écriture la plus courte (aller-retour garanti)
//
// L’arrondi se fait sur la valeur exacte du f64 (pas sur son écriture courte),
// demi-cas loin de zéro.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Nombre de décimales conservées à l’affichage d’un résultat.
pub const DECIMALES_RESULTAT: usize = 10;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };
    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// Écriture à virgule fixe (digits décimales, arrondi demi loin de zéro).
/// None si v n’est pas fini.
pub fn to_fixed(v: f64, digits: usize) -> Option<String> {
    let exact = BigRational::from_float(v)?;
    let scaled = (exact * BigRational::from_integer(pow10(digits))).round();
    Some(scaled_to_decimal(scaled.to_integer(), digits))
}

/// Écriture la plus courte qui relit la même valeur ; -0 s’écrit "0".
pub fn format_court(v: f64) -> String {
    if v.is_zero() {
        return "0".to_string();
    }
    format!("{v}")
}

/// Arrondit à DECIMALES_RESULTAT décimales (valeur relue depuis l’écriture fixe).
pub fn arrondir(v: f64) -> f64 {
    to_fixed(v, DECIMALES_RESULTAT)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(v)
}

/// Texte affiché pour un résultat d’évaluation.
pub fn format_resultat(v: f64) -> String {
    format_court(arrondir(v))
}
