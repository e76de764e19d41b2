//! Tests de propriétés : la calculatrice vue de l’extérieur (touches -> affichage).
//!
//! But : vérifier les contrats observables sans regarder l’intérieur.
//! - précédence, parenthèses, enchaînement après "="
//! - erreurs : affichage "Error" puis reprise propre
//! - arrondi à 10 décimales, idempotence de "="

use super::{CalcConfig, Etat, EvalError, Evaluateur, Operateur, MARQUEUR_ERREUR};

/// Touches sous forme de texte : chiffres, '.', + - × ÷ %, ( ), '=' , 'C', '±'.
fn taper(ev: &mut Evaluateur, touches: &str) {
    for c in touches.chars() {
        match c {
            ' ' => {}
            '=' => {
                let _ = ev.evaluate();
            }
            'C' => ev.clear(),
            '±' => ev.toggle_sign(),
            '(' => {
                ev.open_paren();
            }
            ')' => {
                ev.close_paren();
            }
            _ => match Operateur::depuis_char(c) {
                Some(op) => ev.input_operator(op),
                None => ev.input_digit(c),
            },
        }
    }
}

fn affiche(touches: &str) -> String {
    let mut ev = Evaluateur::default();
    taper(&mut ev, touches);
    ev.display()
}

fn config_toutes() -> Vec<CalcConfig> {
    let mut out = Vec::new();
    for supports_parentheses in [true, false] {
        for percent_as_binary_operator in [true, false] {
            for sign_toggle_enabled in [true, false] {
                out.push(CalcConfig {
                    supports_parentheses,
                    percent_as_binary_operator,
                    sign_toggle_enabled,
                });
            }
        }
    }
    out
}

/* ------------------------ Précédence + parenthèses ------------------------ */

#[test]
fn prop_precedence() {
    assert_eq!(affiche("1+2×3="), "7");
    assert_eq!(affiche("2×3+1="), "7");
    assert_eq!(affiche("10-2-3="), "5");
}

#[test]
fn prop_precedence_toutes_configs() {
    for cfg in config_toutes() {
        let mut ev = Evaluateur::new(cfg);
        taper(&mut ev, "1+2×3");
        assert_eq!(ev.evaluate(), Ok(7.0), "cfg={cfg:?}");
        assert_eq!(ev.display(), "7", "cfg={cfg:?}");
    }
}

#[test]
fn prop_parentheses() {
    assert_eq!(affiche("(2+3)×4="), "20");
    assert_eq!(affiche("2×(3+(4-1))="), "12");
    // fermeture automatique
    assert_eq!(affiche("2×(3+4="), "14");
}

/* ------------------------ Enchaînement ------------------------ */

#[test]
fn prop_enchainement_apres_resultat() {
    let mut ev = Evaluateur::default();
    taper(&mut ev, "1+2×3");
    assert_eq!(ev.evaluate(), Ok(7.0));

    ev.input_operator(Operateur::Plus);
    ev.input_digit('5');
    assert_eq!(ev.evaluate(), Ok(12.0));
    assert_eq!(ev.display(), "12");
}

#[test]
fn prop_chiffre_apres_resultat_repart_de_zero() {
    assert_eq!(affiche("2+2=9"), "9");
    assert_eq!(affiche("2+2=9+1="), "10");
}

#[test]
fn prop_idempotence_egal() {
    let mut ev = Evaluateur::default();
    taper(&mut ev, "1÷3");
    let r1 = ev.evaluate();
    let d1 = ev.display();
    let r2 = ev.evaluate();
    assert_eq!(r1, r2);
    assert_eq!(d1, ev.display());
    assert_eq!(ev.etat(), Etat::Vide);
}

#[test]
fn prop_egal_sur_etat_initial() {
    let mut ev = Evaluateur::default();
    assert_eq!(ev.evaluate(), Ok(0.0));
    assert_eq!(ev.display(), "0");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn prop_double_point() {
    let mut ev = Evaluateur::default();
    taper(&mut ev, "3.");
    let avant = ev.entree().to_string();
    ev.input_digit('.');
    assert_eq!(ev.entree(), avant);

    let mut ev = Evaluateur::default();
    ev.input_digit('.');
    assert_eq!(ev.entree(), "0.");
    ev.input_digit('.');
    assert_eq!(ev.entree(), "0.");
}

#[test]
fn prop_affichage_operateur_en_attente() {
    assert_eq!(affiche("12+"), "12 +");
    assert_eq!(affiche("12+×"), "12 ×");
    assert_eq!(affiche("12+3"), "12 + 3");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn prop_division_par_zero() {
    let mut ev = Evaluateur::default();
    taper(&mut ev, "10÷0");
    assert_eq!(ev.evaluate(), Err(EvalError::DivisionByZero));
    assert_eq!(ev.display(), MARQUEUR_ERREUR);
    assert_eq!(ev.etat(), Etat::Erreur);

    // reprise par un chiffre
    ev.input_digit('4');
    assert_eq!(ev.display(), "4");
    assert_eq!(ev.etat(), Etat::SaisieNombre);

    // reprise par C
    taper(&mut ev, "÷0=");
    assert_eq!(ev.display(), MARQUEUR_ERREUR);
    ev.clear();
    assert_eq!(ev.display(), "0");
    assert_eq!(ev.etat(), Etat::Vide);
}

#[test]
fn prop_pas_de_resultat_partiel_apres_erreur() {
    let mut ev = Evaluateur::default();
    taper(&mut ev, "5+(3÷0)");
    assert!(ev.evaluate().is_err());
    assert!(ev.historique().is_empty());
    assert_eq!(ev.parentheses_ouvertes(), 0);
    assert_eq!(ev.entree(), "0");

    // ni opérateur ni parenthèse ne font sortir de l’erreur
    taper(&mut ev, "+(");
    assert_eq!(ev.display(), MARQUEUR_ERREUR);
    assert_eq!(ev.etat(), Etat::Erreur);
    assert!(ev.historique().is_empty());

    // un chiffre repart d’un calcul neuf
    taper(&mut ev, "2+3=");
    assert_eq!(ev.display(), "5");
}

#[test]
fn prop_historique_alterne_nombre_operateur() {
    use super::jetons::Tok;

    for cfg in config_toutes() {
        let mut ev = Evaluateur::new(cfg);
        taper(&mut ev, &"7".repeat(500));
        taper(&mut ev, "+");
        taper(&mut ev, &"8".repeat(500));
        taper(&mut ev, "×");
        let h = ev.historique();
        assert_eq!(h.len(), 4, "cfg={cfg:?}");
        for (i, t) in h.iter().enumerate() {
            assert_eq!(matches!(t, Tok::Num(_)), i % 2 == 0, "cfg={cfg:?} h={h:?}");
        }
    }
}

#[test]
fn prop_clear_depuis_tout_etat() {
    for touches in ["", "12", "12+", "(1+", "1÷0=", "2×3=", "(", "7±"] {
        for cfg in config_toutes() {
            let mut ev = Evaluateur::new(cfg);
            taper(&mut ev, touches);
            ev.clear();
            assert_eq!(ev.display(), "0", "touches={touches:?} cfg={cfg:?}");
            assert_eq!(ev.etat(), Etat::Vide);
        }
    }
}

/* ------------------------ Arrondi ------------------------ */

#[test]
fn prop_arrondi_dix_decimales() {
    assert_eq!(affiche("1÷3="), "0.3333333333");
    assert_eq!(affiche("2÷3="), "0.6666666667");
    assert_eq!(affiche("0.1+0.2="), "0.3");
    assert_eq!(affiche("1÷8="), "0.125");
}

#[test]
fn prop_resultat_negatif_puis_signe() {
    assert_eq!(affiche("3-5="), "-2");
    assert_eq!(affiche("3-5=±"), "2");
}
