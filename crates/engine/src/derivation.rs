//! Procedural conclusion derivation.
//!
//! Combines the deadline verdict and resolved fee rates into the nine
//! conclusion strings and the ordered procedural notes list. Every
//! label here is surfaced verbatim to the analyst and copied into legal
//! drafts, so the literal wording is part of the contract. No path
//! errors out: unset answers fall through to neutral labels.

use shared_types::{
    BarcodeCheck, CaseNumberCheck, CaseSnapshot, CounterArguments, DeadlineScheme,
    DecisionType, Exclusivity, LegalAid, Outputs, PartialKind, PaymentTiming, ProofKind,
    ProsecutorPosition, Signer, SuspensiveEffect, YesNo,
};

use crate::calendar::{add_days, CourtCalendar};
use crate::currency::{format_brl, parse_amount};
use crate::deadline::compute_timeliness;
use crate::rates::RateBook;

/// Evaluate every derivation for one snapshot.
pub fn compute_outputs(
    snapshot: &CaseSnapshot,
    calendar: &CourtCalendar,
    rates: &RateBook,
) -> Outputs {
    let timeliness = compute_timeliness(snapshot, calendar);

    let superior_rate = rates.superior(snapshot.appeal_type, snapshot.filing_date);
    let funjus_rate = rates.funjus.resolve(snapshot.filing_date);
    let court_label = RateBook::court_label(snapshot.appeal_type);
    let superior_due = superior_rate.value;
    let funjus_due = funjus_rate.value;

    let waiver = fee_waiver_label(snapshot);
    let below = funjus_below(snapshot, funjus_due);
    let has_funjus_info = !snapshot.funjus_guide.is_unset()
        || !snapshot.funjus_proof.is_unset()
        || !snapshot.funjus_guide_movement.trim().is_empty()
        || !snapshot.funjus_proof_movement.trim().is_empty();

    let mut outputs = Outputs {
        timeliness,
        superior_fee_due: superior_due,
        funjus_fee_due: funjus_due,
        court_label: court_label.to_string(),
        superior_rate_since: superior_rate.since,
        funjus_rate_since: funjus_rate.since,
        counter_arguments: counter_argument_conclusion(snapshot),
        prosecutor: prosecutor_conclusion(snapshot),
        gru: gru_conclusion(snapshot, waiver.as_deref()),
        funjus: funjus_conclusion(snapshot, waiver.as_deref(), below, has_funjus_info),
        representation: representation_conclusion(snapshot),
        exclusivity: exclusivity_conclusion(snapshot),
        suspensive_effect: suspensive_effect_conclusion(snapshot),
        partial_payment: partial_payment_conclusion(snapshot, below),
        notes: Vec::new(),
    };
    outputs.notes = build_notes(
        snapshot,
        waiver.is_some(),
        court_label,
        superior_due,
        funjus_due,
    );

    tracing::debug!(
        court = court_label,
        superior_due,
        funjus_due,
        waived = waiver.is_some(),
        notes = outputs.notes.len(),
        "outputs derived"
    );

    outputs
}

/// Exemption label when no fee is owed, shared by both fee conclusions.
///
/// Covers public-entity dispensation and every free-legal-aid path that
/// suspends the payment duty. `None` means fees are due as normal.
pub fn fee_waiver_label(snapshot: &CaseSnapshot) -> Option<String> {
    if snapshot.fee_dispensed.is_yes() {
        return Some("dispensado (CPC, art. 1.007, §1º)".to_string());
    }
    if snapshot.legal_aid == LegalAid::ClaimsBeneficiary && !snapshot.incompatible_act.is_yes()
    {
        if snapshot.aid_granted.is_yes() {
            return Some(format!(
                "justiça gratuita mov. {}",
                movement_or_unknown(&snapshot.aid_granted_movement)
            ));
        }
        if snapshot.aid_requested.is_yes() {
            return Some(format!(
                "justiça gratuita mov. {}",
                movement_or_unknown(&snapshot.aid_requested_movement)
            ));
        }
        return Some("justiça gratuita requerida no recurso".to_string());
    }
    match snapshot.legal_aid {
        LegalAid::RequestedInAppeal => {
            Some("justiça gratuita requerida no recurso".to_string())
        }
        LegalAid::AppealObject => Some("justiça gratuita é o próprio objeto".to_string()),
        LegalAid::Presumed => Some(
            "justiça gratuita presumida (defensor público, dativo ou NPJ)".to_string(),
        ),
        _ => None,
    }
}

/// The FUNJUS payment on file is below the resolved rate. Requires the
/// amount to have been entered at all; malformed entries count as zero.
pub fn funjus_below(snapshot: &CaseSnapshot, funjus_due: f64) -> bool {
    snapshot.fee_dispensed.is_no()
        && snapshot.legal_aid == LegalAid::NotInvoked
        && !snapshot.funjus_paid.trim().is_empty()
        && parse_amount(&snapshot.funjus_paid) < funjus_due
}

fn movement_or_unknown(movement: &str) -> &str {
    if movement.is_empty() {
        "?"
    } else {
        movement
    }
}

fn counter_argument_conclusion(snapshot: &CaseSnapshot) -> String {
    match snapshot.counter_arguments {
        CounterArguments::Filed => {
            if snapshot.counter_movements.is_empty() {
                "apresentadas".to_string()
            } else {
                format!("mov(s). {}", snapshot.counter_movements)
            }
        }
        CounterArguments::SomeMissing => {
            if snapshot.counter_movements.is_empty() {
                "ausente alguma".to_string()
            } else {
                format!("mov(s). {}", snapshot.counter_movements)
            }
        }
        CounterArguments::Absent => {
            if snapshot.respondent_notified.is_yes()
                && snapshot.response_deadline_open.is_no()
                && snapshot.response_deadline_elapsed.is_yes()
            {
                "não".to_string()
            } else if snapshot.respondent_notified.is_no() && snapshot.no_counsel.is_yes() {
                "sem adv.".to_string()
            } else {
                "vide obs.".to_string()
            }
        }
        CounterArguments::Unset => "vide obs.".to_string(),
    }
}

fn prosecutor_conclusion(snapshot: &CaseSnapshot) -> String {
    if snapshot.prosecutor_intervenes.is_no() {
        return "N/A".to_string();
    }
    if snapshot.prosecutor_manifested.is_yes() {
        let base = match snapshot.prosecutor_position {
            ProsecutorPosition::Unset => "mera ciência",
            position => position.as_str(),
        };
        return if snapshot.prosecutor_movements.is_empty() {
            base.to_string()
        } else {
            format!("{base}; mov. {}", snapshot.prosecutor_movements)
        };
    }
    if snapshot.remitted_to_prosecutor.is_yes() && snapshot.prosecutor_deadline_elapsed.is_yes()
    {
        return "deixou de se manifestar".to_string();
    }
    "vide obs.".to_string()
}

fn gru_conclusion(snapshot: &CaseSnapshot, waiver: Option<&str>) -> String {
    if let Some(label) = waiver {
        return label.to_string();
    }
    let guide = snapshot.gru_guide_movement.trim();
    let proof = snapshot.gru_proof_movement.trim();
    if !guide.is_empty() && !proof.is_empty() && guide != proof {
        return format!("GRU guia mov. {guide}; comprovante mov. {proof}");
    }
    if !guide.is_empty() || !proof.is_empty() {
        let movement = if guide.is_empty() { proof } else { guide };
        return format!("GRU mov. {movement}");
    }
    "GRU não localizada".to_string()
}

fn funjus_conclusion(
    snapshot: &CaseSnapshot,
    waiver: Option<&str>,
    below: bool,
    has_info: bool,
) -> String {
    if let Some(label) = waiver {
        return label.to_string();
    }
    if !below && !has_info {
        return "N/A".to_string();
    }
    let guide_info = match snapshot.funjus_guide {
        YesNo::Yes => format!(
            "guia mov. {}",
            movement_or_unknown(snapshot.funjus_guide_movement.trim())
        ),
        YesNo::No => "guia não localizada".to_string(),
        YesNo::Unset => "guia pendente".to_string(),
    };
    let proof_info = match snapshot.funjus_proof {
        YesNo::Yes => format!(
            "comprovante mov. {}",
            movement_or_unknown(snapshot.funjus_proof_movement.trim())
        ),
        YesNo::No => "comprovante não localizado".to_string(),
        YesNo::Unset => "comprovante pendente".to_string(),
    };
    format!("{guide_info}; {proof_info}")
}

fn partial_payment_conclusion(snapshot: &CaseSnapshot, below: bool) -> String {
    if !below {
        return "Não informado".to_string();
    }
    match snapshot.partial_kind {
        PartialKind::Unset | PartialKind::No => "Não informado".to_string(),
        PartialKind::Other => {
            if snapshot.partial_other.is_empty() {
                "Parcial: outros (especificar)".to_string()
            } else {
                format!("Parcial: {}", snapshot.partial_other)
            }
        }
        kind => format!("Parcial: {}", kind.as_str()),
    }
}

fn representation_conclusion(snapshot: &CaseSnapshot) -> String {
    match snapshot.signer {
        Signer::PublicAttorney | Signer::OwnCause => snapshot.signer.as_str().to_string(),
        Signer::AppointedAttorney => {
            if snapshot.appointment_movement.is_empty() {
                "nomeação não localizada".to_string()
            } else {
                format!("mov. {}", snapshot.appointment_movement)
            }
        }
        Signer::PrivateCounsel => {
            if snapshot.poa_movements.is_empty() {
                "movimentos não informados".to_string()
            } else {
                format!("mov(s). {}", snapshot.poa_movements)
            }
        }
        Signer::Unset => "N/A".to_string(),
    }
}

fn exclusivity_conclusion(snapshot: &CaseSnapshot) -> String {
    match snapshot.exclusivity {
        Exclusivity::NotRequested => "não requerida".to_string(),
        Exclusivity::Requested if snapshot.registered.is_yes() => {
            "requerida e já cadastrada".to_string()
        }
        Exclusivity::Requested if snapshot.powers_regular.is_yes() => "requerida".to_string(),
        Exclusivity::Requested if snapshot.powers_regular.is_no() => {
            "requerida, mas sem poderes".to_string()
        }
        _ => "N/A".to_string(),
    }
}

fn suspensive_effect_conclusion(snapshot: &CaseSnapshot) -> String {
    match snapshot.suspensive_effect {
        SuspensiveEffect::Unset => "N/A".to_string(),
        SuspensiveEffect::SeparatePetition if snapshot.docketed.is_yes() => {
            "requerido em petição apartada e autuado".to_string()
        }
        effect => effect.as_str().to_string(),
    }
}

/// Build the ordered procedural notes. Each predicate is independent;
/// the push order below is the order notes are displayed and exported.
fn build_notes(
    snapshot: &CaseSnapshot,
    fees_waived: bool,
    court_label: &str,
    superior_due: f64,
    funjus_due: f64,
) -> Vec<String> {
    let mut notes = Vec::new();

    let doubled_due = snapshot.fee_dispensed.is_yes()
        || snapshot.legal_aid == LegalAid::Presumed
        || snapshot.signer == Signer::AppointedAttorney
        || snapshot.signer == Signer::PublicAttorney;
    let doubled_claimed = snapshot.deadline_scheme == DeadlineScheme::Doubled;

    if let (Some(dispatch), Some(read)) = (snapshot.dispatch_date, snapshot.effective_read_date())
    {
        if read > add_days(dispatch, 10) {
            notes.push("Leitura após 10 dias: considerar intimação automática.".to_string());
        }
    }

    if snapshot.decision_type == DecisionType::Monocratic {
        notes.push("Decisão monocrática: REsp/RExt incabível (nulidade).".to_string());
    }
    if snapshot.settlement.is_yes() {
        if snapshot.settlement_valid.is_yes() {
            notes.push("Acordo válido: encerrar o processo sem análise do mérito.".to_string());
        } else if snapshot.settlement_valid.is_no() {
            notes.push(
                "Acordo inválido: verificar poderes expressamente outorgados e partes."
                    .to_string(),
            );
        }
    }
    if snapshot.withdrawal.is_yes() {
        if snapshot.withdrawal_valid.is_yes() {
            notes.push(
                "Desistência válida: encerrar o processo sem análise do mérito.".to_string(),
            );
        } else if snapshot.withdrawal_valid.is_no() {
            notes.push(
                "Desistência inválida: verificar poderes expressamente outorgados e partes."
                    .to_string(),
            );
        }
    }
    if doubled_claimed && !doubled_due {
        notes.push("Prazo em dobro: apenas MP/Defensoria/NPJ/dativo.".to_string());
    } else if doubled_due && !doubled_claimed {
        notes.push(
            "Prazo em dobro aplicável (MP/Defensoria/NPJ/dativo/ente público).".to_string(),
        );
    }
    if snapshot.sfh.is_yes() {
        notes.push("SFH pós 24/03/2024: enviar para filtro específico.".to_string());
    }
    if !snapshot.origin_deadline_open.is_yes()
        && !matches!(
            snapshot.counter_arguments,
            CounterArguments::Unset | CounterArguments::Absent
        )
        && snapshot.counter_movements.trim().is_empty()
    {
        notes.push("Informar movimento da juntada das contrarrazões/renúncia.".to_string());
    }
    if !fees_waived
        && snapshot.legal_aid == LegalAid::NotInvoked
        && !matches!(
            snapshot.payment_timing,
            PaymentTiming::Unset | PaymentTiming::Absent
        )
        && snapshot.gru_guide_movement.is_empty()
    {
        notes.push("Informar movimento da GRU (guia/comprovante).".to_string());
    }
    if !fees_waived && snapshot.funjus_guide.is_yes() {
        if snapshot.guide_original.is_no() {
            notes.push(
                "Guia FUNJUS não é original do recurso; verificar reutilização.".to_string(),
            );
        } else if snapshot.guide_original.is_unset() {
            notes.push("Informar se a guia FUNJUS é original do recurso.".to_string());
        }
    }
    if !fees_waived
        && snapshot.funjus_proof.is_yes()
        && snapshot.barcode_check == BarcodeCheck::DivergesOrMissing
    {
        notes.push(
            "Código de barras divergente/guia ausente: conferir preparo FUNJUS.".to_string(),
        );
    }
    if !fees_waived && snapshot.gru_case_check == CaseNumberCheck::Diverges {
        notes.push("Número do processo divergente na GRU: conferir guia.".to_string());
    }
    if !fees_waived && snapshot.funjus_case_check == CaseNumberCheck::Diverges {
        notes.push("Número do processo divergente na guia FUNJUS.".to_string());
    }
    if !fees_waived
        && snapshot.funjus_proof.is_yes()
        && snapshot.proof_kind == ProofKind::Scheduling
    {
        notes.push(
            "Comprovante de agendamento não comprova pagamento; exigir comprovante."
                .to_string(),
        );
    }
    if snapshot.origin_deadline_open.is_yes() {
        notes.push(
            "Há prazo em aberto na Câmara de origem; sugere-se devolver para aguardar decurso."
                .to_string(),
        );
    } else {
        let not_filed = snapshot.counter_arguments != CounterArguments::Filed;
        if not_filed && snapshot.respondent_notified.is_no() && snapshot.no_counsel.is_no() {
            notes.push("Determinar intimação do(s) recorrido(s) para contrarrazões.".to_string());
        } else if not_filed
            && snapshot.respondent_notified.is_yes()
            && snapshot.response_deadline_open.is_yes()
        {
            notes.push("Prazo de contrarrazões em aberto; aguardar decurso.".to_string());
        } else if not_filed
            && snapshot.respondent_notified.is_yes()
            && snapshot.response_deadline_open.is_no()
            && snapshot.response_deadline_elapsed.is_no()
        {
            notes.push(
                "Determinar certificação do decurso do prazo para contrarrazões.".to_string(),
            );
        }
    }
    if snapshot.prosecutor_intervenes.is_yes() && snapshot.prosecutor_manifested.is_no() {
        if snapshot.remitted_to_prosecutor.is_yes()
            && snapshot.prosecutor_deadline_elapsed.is_no()
        {
            notes.push("Aguardar decurso do prazo para manifestação da PGJ.".to_string());
        } else if snapshot.remitted_to_prosecutor.is_no() {
            notes.push("Encaminhar autos à PGJ.".to_string());
        }
    }

    // Fee shortfall family: the three cases are mutually exclusive and
    // checked in order of severity.
    let double_collection = snapshot.fee_dispensed.is_no()
        && snapshot.legal_aid == LegalAid::NotInvoked
        && (snapshot.payment_timing == PaymentTiming::Absent
            || snapshot.payment_timing == PaymentTiming::Later
            || (snapshot.payment_timing == PaymentTiming::NextBusinessDay
                && snapshot.after_cutoff.is_no()));
    let superior_paid = parse_amount(&snapshot.superior_paid);
    let funjus_paid = parse_amount(&snapshot.funjus_paid);

    if double_collection && (superior_due > 0.0 || funjus_due > 0.0) {
        notes.push(format!(
            "Caso de recolhimento em dobro; intimar para regularizar. Valores: {court_label} {}, FUNJUS {}",
            format_brl(superior_due * 2.0),
            format_brl(funjus_due * 2.0)
        ));
    } else if snapshot.fee_dispensed.is_no()
        && snapshot.legal_aid == LegalAid::ClaimsBeneficiary
        && snapshot.incompatible_act.is_yes()
    {
        notes.push(format!(
            "Ato incompatível com justiça gratuita; intimar para recolher preparo. Valores: {court_label} {}, FUNJUS {}",
            format_brl(superior_due),
            format_brl(funjus_due)
        ));
    } else if snapshot.fee_dispensed.is_no()
        && (snapshot.legal_aid == LegalAid::NotInvoked || snapshot.incompatible_act.is_yes())
        && (superior_paid < superior_due || funjus_paid < funjus_due)
    {
        let mut parts = Vec::new();
        if superior_paid < superior_due {
            parts.push(format!(
                "{court_label} {}",
                format_brl(superior_due - superior_paid)
            ));
        }
        if funjus_paid < funjus_due {
            parts.push(format!("Funjus {}", format_brl(funjus_due - funjus_paid)));
        }
        if !parts.is_empty() {
            notes.push(format!("Complementar preparo: {}", parts.join(" | ")));
        }
    }

    if snapshot.signer == Signer::PrivateCounsel && snapshot.poa_chain_complete.is_no() {
        notes.push("Regularizar cadeia de procurações para o subscritor.".to_string());
    } else if snapshot.signer == Signer::PrivateCounsel
        && snapshot.poa_chain_complete.is_yes()
        && snapshot.poa_movements.is_empty()
    {
        notes.push("Informar movimentos completos da cadeia de poderes.".to_string());
    }
    if snapshot.exclusivity == Exclusivity::Requested
        && snapshot.registered.is_no()
        && snapshot.powers_regular.is_yes()
    {
        notes.push(
            "Deferir pedido de exclusividade e cadastrar procurador nas partes.".to_string(),
        );
    }
    if snapshot.suspensive_effect == SuspensiveEffect::SeparatePetition
        && snapshot.docketed.is_no()
    {
        notes.push("Autuar separadamente o pedido de efeito suspensivo.".to_string());
    }

    notes
}
