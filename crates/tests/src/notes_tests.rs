//! Procedural note tests: presence, wording, and display order.

use crate::common::{d, fee_snapshot, test_calendar, test_rates};
use engine::derivation::compute_outputs;
use pretty_assertions::assert_eq;
use shared_types::{
    CaseSnapshot, DeadlineScheme, DecisionType, LegalAid, PaymentTiming, Signer, YesNo,
};

fn notes(snapshot: &CaseSnapshot) -> Vec<String> {
    compute_outputs(snapshot, &test_calendar(), &test_rates()).notes
}

#[test]
fn late_read_triggers_auto_notification_note() {
    let snapshot = CaseSnapshot {
        electronic_read: YesNo::Yes,
        read_date: Some(d(2024, 4, 12)),
        ..fee_snapshot()
    };
    assert!(notes(&snapshot)
        .contains(&"Leitura após 10 dias: considerar intimação automática.".to_string()));
}

#[test]
fn read_within_ten_days_has_no_note() {
    let snapshot = CaseSnapshot {
        electronic_read: YesNo::Yes,
        read_date: Some(d(2024, 4, 11)),
        ..fee_snapshot()
    };
    assert!(!notes(&snapshot).iter().any(|n| n.starts_with("Leitura")));
}

#[test]
fn monocratic_decision_note() {
    let snapshot = CaseSnapshot {
        decision_type: DecisionType::Monocratic,
        ..fee_snapshot()
    };
    assert!(notes(&snapshot)
        .contains(&"Decisão monocrática: REsp/RExt incabível (nulidade).".to_string()));
}

#[test]
fn settlement_and_withdrawal_notes() {
    let snapshot = CaseSnapshot {
        settlement: YesNo::Yes,
        settlement_valid: YesNo::Yes,
        withdrawal: YesNo::Yes,
        withdrawal_valid: YesNo::No,
        ..fee_snapshot()
    };
    let notes = notes(&snapshot);
    assert!(notes
        .contains(&"Acordo válido: encerrar o processo sem análise do mérito.".to_string()));
    assert!(notes.contains(
        &"Desistência inválida: verificar poderes expressamente outorgados e partes."
            .to_string()
    ));
}

#[test]
fn doubled_scheme_claimed_without_entitlement() {
    let snapshot = CaseSnapshot {
        deadline_scheme: DeadlineScheme::Doubled,
        ..fee_snapshot()
    };
    assert!(notes(&snapshot)
        .contains(&"Prazo em dobro: apenas MP/Defensoria/NPJ/dativo.".to_string()));
}

#[test]
fn doubled_scheme_due_but_not_claimed() {
    let snapshot = CaseSnapshot {
        signer: Signer::PublicAttorney,
        ..fee_snapshot()
    };
    assert!(notes(&snapshot).contains(
        &"Prazo em dobro aplicável (MP/Defensoria/NPJ/dativo/ente público).".to_string()
    ));
}

#[test]
fn doubled_scheme_claimed_and_due_is_silent() {
    let snapshot = CaseSnapshot {
        deadline_scheme: DeadlineScheme::Doubled,
        signer: Signer::AppointedAttorney,
        ..fee_snapshot()
    };
    assert!(!notes(&snapshot).iter().any(|n| n.starts_with("Prazo em dobro")));
}

#[test]
fn missing_gru_movement_note() {
    let snapshot = CaseSnapshot {
        gru_guide_movement: String::new(),
        ..fee_snapshot()
    };
    assert!(notes(&snapshot)
        .contains(&"Informar movimento da GRU (guia/comprovante).".to_string()));
}

#[test]
fn double_collection_note_doubles_both_fees() {
    let snapshot = CaseSnapshot {
        payment_timing: PaymentTiming::Absent,
        ..fee_snapshot()
    };
    assert!(notes(&snapshot).contains(
        &"Caso de recolhimento em dobro; intimar para regularizar. Valores: STJ R$ 518,16, FUNJUS R$ 229,26"
            .to_string()
    ));
}

#[test]
fn next_business_day_payment_after_cutoff_is_regular() {
    let snapshot = CaseSnapshot {
        payment_timing: PaymentTiming::NextBusinessDay,
        after_cutoff: YesNo::Yes,
        ..fee_snapshot()
    };
    assert!(!notes(&snapshot)
        .iter()
        .any(|n| n.starts_with("Caso de recolhimento em dobro")));
}

#[test]
fn incompatible_act_note_uses_single_fees() {
    let snapshot = CaseSnapshot {
        legal_aid: LegalAid::ClaimsBeneficiary,
        incompatible_act: YesNo::Yes,
        ..fee_snapshot()
    };
    assert!(notes(&snapshot).contains(
        &"Ato incompatível com justiça gratuita; intimar para recolher preparo. Valores: STJ R$ 259,08, FUNJUS R$ 114,63"
            .to_string()
    ));
}

#[test]
fn shortfall_note_lists_each_gap() {
    let snapshot = CaseSnapshot {
        superior_paid: "200.00".to_string(),
        funjus_paid: "100.00".to_string(),
        ..fee_snapshot()
    };
    assert!(notes(&snapshot)
        .contains(&"Complementar preparo: STJ R$ 59,08 | Funjus R$ 14,63".to_string()));
}

#[test]
fn shortfall_note_limits_to_underpaid_fee() {
    let snapshot = CaseSnapshot {
        funjus_paid: "100.00".to_string(),
        ..fee_snapshot()
    };
    assert!(notes(&snapshot)
        .contains(&"Complementar preparo: Funjus R$ 14,63".to_string()));
}

#[test]
fn fully_paid_fees_have_no_shortfall_note() {
    assert!(!notes(&fee_snapshot())
        .iter()
        .any(|n| n.starts_with("Complementar preparo")));
}

#[test]
fn open_origin_deadline_suppresses_counter_argument_steps() {
    let snapshot = CaseSnapshot {
        origin_deadline_open: YesNo::Yes,
        respondent_notified: YesNo::No,
        no_counsel: YesNo::No,
        ..fee_snapshot()
    };
    let notes = notes(&snapshot);
    assert!(notes.contains(
        &"Há prazo em aberto na Câmara de origem; sugere-se devolver para aguardar decurso."
            .to_string()
    ));
    assert!(!notes.iter().any(|n| n.starts_with("Determinar intimação")));
}

#[test]
fn counter_argument_follow_ups() {
    let notify = CaseSnapshot {
        respondent_notified: YesNo::No,
        no_counsel: YesNo::No,
        ..fee_snapshot()
    };
    assert!(notes(&notify)
        .contains(&"Determinar intimação do(s) recorrido(s) para contrarrazões.".to_string()));

    let waiting = CaseSnapshot {
        respondent_notified: YesNo::Yes,
        response_deadline_open: YesNo::Yes,
        ..fee_snapshot()
    };
    assert!(notes(&waiting)
        .contains(&"Prazo de contrarrazões em aberto; aguardar decurso.".to_string()));

    let certify = CaseSnapshot {
        respondent_notified: YesNo::Yes,
        response_deadline_open: YesNo::No,
        response_deadline_elapsed: YesNo::No,
        ..fee_snapshot()
    };
    assert!(notes(&certify).contains(
        &"Determinar certificação do decurso do prazo para contrarrazões.".to_string()
    ));
}

#[test]
fn prosecutor_follow_ups() {
    let forward = CaseSnapshot {
        prosecutor_intervenes: YesNo::Yes,
        prosecutor_manifested: YesNo::No,
        remitted_to_prosecutor: YesNo::No,
        ..fee_snapshot()
    };
    assert!(notes(&forward).contains(&"Encaminhar autos à PGJ.".to_string()));

    let wait = CaseSnapshot {
        prosecutor_intervenes: YesNo::Yes,
        prosecutor_manifested: YesNo::No,
        remitted_to_prosecutor: YesNo::Yes,
        prosecutor_deadline_elapsed: YesNo::No,
        ..fee_snapshot()
    };
    assert!(notes(&wait)
        .contains(&"Aguardar decurso do prazo para manifestação da PGJ.".to_string()));
}

#[test]
fn notes_keep_display_order() {
    // One snapshot triggering notes from several families; the list
    // must come out in the fixed build order.
    let snapshot = CaseSnapshot {
        decision_type: DecisionType::Monocratic,
        sfh: YesNo::Yes,
        gru_guide_movement: String::new(),
        funjus_paid: "100.00".to_string(),
        respondent_notified: YesNo::No,
        no_counsel: YesNo::No,
        ..fee_snapshot()
    };
    let notes = notes(&snapshot);
    assert_eq!(
        notes,
        vec![
            "Decisão monocrática: REsp/RExt incabível (nulidade).".to_string(),
            "SFH pós 24/03/2024: enviar para filtro específico.".to_string(),
            "Informar movimento da GRU (guia/comprovante).".to_string(),
            "Determinar intimação do(s) recorrido(s) para contrarrazões.".to_string(),
            "Complementar preparo: Funjus R$ 14,63".to_string(),
        ]
    );
}
