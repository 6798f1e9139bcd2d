//! Field requirement validation.
//!
//! Re-derives the set of still-missing required fields from scratch on
//! every evaluation. Rules form an explicit ordered list: each pairs a
//! gating predicate (over the snapshot and, for fee comparisons, the
//! derived outputs) with the field's own emptiness test. A field is in
//! error iff its gate holds and its own value is empty or unset.

use std::collections::BTreeSet;

use shared_types::{
    AppealType, BarcodeCheck, CaseNumberCheck, CaseSnapshot, ChamberArea, CounterArguments,
    DecisionType, Exclusivity, FieldId, FineReason, FineStatus, LegalAid, MissingLink,
    Outputs, PaymentTiming, ProofKind, ProsecutorPosition, Signer, SuspensiveEffect,
};

use crate::derivation::funjus_below;

type Gate = fn(&CaseSnapshot, &Outputs) -> bool;
type Missing = fn(&CaseSnapshot) -> bool;

/// One requirement rule. Declaration order in [`rules`] is evaluation
/// and reporting order.
pub struct FieldRule {
    pub field: FieldId,
    required: Gate,
    missing: Missing,
}

fn always(_: &CaseSnapshot, _: &Outputs) -> bool {
    true
}

/// Fees are live and a payment-timing answer other than "absent" was
/// given, so the GRU movement block becomes mandatory.
fn gru_block(snapshot: &CaseSnapshot) -> bool {
    snapshot.fee_dispensed.is_no()
        && snapshot.legal_aid == LegalAid::NotInvoked
        && !matches!(
            snapshot.payment_timing,
            PaymentTiming::Unset | PaymentTiming::Absent
        )
}

fn claims_aid(snapshot: &CaseSnapshot) -> bool {
    snapshot.fee_dispensed.is_no() && snapshot.legal_aid == LegalAid::ClaimsBeneficiary
}

fn below(snapshot: &CaseSnapshot, outputs: &Outputs) -> bool {
    funjus_below(snapshot, outputs.funjus_fee_due)
}

fn counter_chain_open(snapshot: &CaseSnapshot) -> bool {
    !snapshot.origin_deadline_open.is_yes()
        && snapshot.counter_arguments != CounterArguments::Filed
}

/// The ordered requirement rules for the whole form.
pub fn rules() -> Vec<FieldRule> {
    vec![
        FieldRule {
            field: FieldId::AppealType,
            required: always,
            missing: |s| s.appeal_type == AppealType::Unset,
        },
        FieldRule {
            field: FieldId::Settlement,
            required: always,
            missing: |s| s.settlement.is_unset(),
        },
        FieldRule {
            field: FieldId::SettlementValid,
            required: |s, _| s.settlement.is_yes(),
            missing: |s| s.settlement_valid.is_unset(),
        },
        FieldRule {
            field: FieldId::Withdrawal,
            required: always,
            missing: |s| s.withdrawal.is_unset(),
        },
        FieldRule {
            field: FieldId::WithdrawalValid,
            required: |s, _| s.withdrawal.is_yes(),
            missing: |s| s.withdrawal_valid.is_unset(),
        },
        FieldRule {
            field: FieldId::CaseCode,
            required: always,
            missing: |s| s.case_code.is_empty(),
        },
        FieldRule {
            field: FieldId::DecisionType,
            required: always,
            missing: |s| s.decision_type == DecisionType::Unset,
        },
        FieldRule {
            field: FieldId::ChamberArea,
            required: always,
            missing: |s| s.chamber_area == ChamberArea::Unset,
        },
        FieldRule {
            field: FieldId::ChamberNumber,
            required: always,
            missing: |s| s.chamber_number.is_empty(),
        },
        FieldRule {
            field: FieldId::OriginDeadlineOpen,
            required: always,
            missing: |s| s.origin_deadline_open.is_unset(),
        },
        FieldRule {
            field: FieldId::Fine,
            required: always,
            missing: |s| s.fine == FineStatus::Unset,
        },
        FieldRule {
            field: FieldId::FineReason,
            required: |s, _| s.fine == FineStatus::Uncollected,
            missing: |s| s.fine_reason == FineReason::Unset,
        },
        FieldRule {
            field: FieldId::FeeDispensed,
            required: always,
            missing: |s| s.fee_dispensed.is_unset(),
        },
        FieldRule {
            field: FieldId::LegalAid,
            required: |s, _| s.fee_dispensed.is_no(),
            missing: |s| s.legal_aid == LegalAid::Unset,
        },
        FieldRule {
            field: FieldId::AidGranted,
            required: |s, _| claims_aid(s),
            missing: |s| s.aid_granted.is_unset(),
        },
        FieldRule {
            field: FieldId::AidGrantedMovement,
            required: |s, _| claims_aid(s) && s.aid_granted.is_yes(),
            missing: |s| s.aid_granted_movement.is_empty(),
        },
        FieldRule {
            field: FieldId::AidRequested,
            required: |s, _| claims_aid(s) && s.aid_granted.is_no(),
            missing: |s| s.aid_requested.is_unset(),
        },
        FieldRule {
            field: FieldId::AidRequestedMovement,
            required: |s, _| claims_aid(s) && s.aid_granted.is_no() && s.aid_requested.is_yes(),
            missing: |s| s.aid_requested_movement.is_empty(),
        },
        FieldRule {
            field: FieldId::IncompatibleAct,
            required: |s, _| claims_aid(s),
            missing: |s| s.incompatible_act.is_unset(),
        },
        FieldRule {
            field: FieldId::PaymentTiming,
            required: |s, _| s.fee_dispensed.is_no() && s.legal_aid == LegalAid::NotInvoked,
            missing: |s| s.payment_timing == PaymentTiming::Unset,
        },
        FieldRule {
            field: FieldId::AfterCutoff,
            required: |s, _| {
                s.fee_dispensed.is_no()
                    && s.legal_aid == LegalAid::NotInvoked
                    && s.payment_timing == PaymentTiming::NextBusinessDay
            },
            missing: |s| s.after_cutoff.is_unset(),
        },
        // Either GRU movement satisfies the requirement, so the guide
        // field only errors while the proof field is also blank.
        FieldRule {
            field: FieldId::GruGuideMovement,
            required: |s, _| gru_block(s) && s.gru_proof_movement.trim().is_empty(),
            missing: |s| s.gru_guide_movement.trim().is_empty(),
        },
        FieldRule {
            field: FieldId::GruCaseCheck,
            required: |s, _| {
                gru_block(s)
                    && (!s.gru_guide_movement.trim().is_empty()
                        || !s.gru_proof_movement.trim().is_empty())
            },
            missing: |s| s.gru_case_check == CaseNumberCheck::Unset,
        },
        FieldRule {
            field: FieldId::FunjusGuideMovement,
            required: |s, o| below(s, o) && s.funjus_guide.is_yes(),
            missing: |s| s.funjus_guide_movement.trim().is_empty(),
        },
        FieldRule {
            field: FieldId::GuideOriginal,
            required: |s, o| below(s, o) && s.funjus_guide.is_yes(),
            missing: |s| s.guide_original.is_unset(),
        },
        FieldRule {
            field: FieldId::FunjusCaseCheck,
            required: |s, o| below(s, o) && s.funjus_guide.is_yes(),
            missing: |s| s.funjus_case_check == CaseNumberCheck::Unset,
        },
        FieldRule {
            field: FieldId::FunjusProofMovement,
            required: |s, o| below(s, o) && s.funjus_proof.is_yes(),
            missing: |s| s.funjus_proof_movement.trim().is_empty(),
        },
        FieldRule {
            field: FieldId::ProofKind,
            required: |s, o| below(s, o) && s.funjus_proof.is_yes(),
            missing: |s| s.proof_kind == ProofKind::Unset,
        },
        FieldRule {
            field: FieldId::BarcodeCheck,
            required: |s, o| below(s, o) && s.funjus_proof.is_yes(),
            missing: |s| s.barcode_check == BarcodeCheck::Unset,
        },
        FieldRule {
            field: FieldId::FunjusJustification,
            required: below,
            missing: |s| s.funjus_justification.trim().is_empty(),
        },
        FieldRule {
            field: FieldId::Signer,
            required: always,
            missing: |s| s.signer == Signer::Unset,
        },
        FieldRule {
            field: FieldId::AppointmentMovement,
            required: |s, _| s.signer == Signer::AppointedAttorney,
            missing: |s| s.appointment_movement.is_empty(),
        },
        FieldRule {
            field: FieldId::PoaMovements,
            required: |s, _| s.signer == Signer::PrivateCounsel,
            missing: |s| s.poa_movements.is_empty(),
        },
        FieldRule {
            field: FieldId::PoaChainComplete,
            required: |s, _| s.signer == Signer::PrivateCounsel,
            missing: |s| s.poa_chain_complete.is_unset(),
        },
        FieldRule {
            field: FieldId::MissingLink,
            required: |s, _| s.signer == Signer::PrivateCounsel && s.poa_chain_complete.is_no(),
            missing: |s| s.missing_link == MissingLink::Unset,
        },
        FieldRule {
            field: FieldId::SuspensiveEffect,
            required: always,
            missing: |s| s.suspensive_effect == SuspensiveEffect::Unset,
        },
        FieldRule {
            field: FieldId::Docketed,
            required: |s, _| s.suspensive_effect == SuspensiveEffect::SeparatePetition,
            missing: |s| s.docketed.is_unset(),
        },
        FieldRule {
            field: FieldId::Exclusivity,
            required: always,
            missing: |s| s.exclusivity == Exclusivity::Unset,
        },
        FieldRule {
            field: FieldId::ExclusivityName,
            required: |s, _| s.exclusivity == Exclusivity::Requested,
            missing: |s| s.exclusivity_name.trim().is_empty(),
        },
        FieldRule {
            field: FieldId::Registered,
            required: |s, _| s.exclusivity == Exclusivity::Requested,
            missing: |s| s.registered.is_unset(),
        },
        FieldRule {
            field: FieldId::PowersRegular,
            required: |s, _| s.exclusivity == Exclusivity::Requested && s.registered.is_no(),
            missing: |s| s.powers_regular.is_unset(),
        },
        FieldRule {
            field: FieldId::CounterArguments,
            required: |s, _| !s.origin_deadline_open.is_yes(),
            missing: |s| s.counter_arguments == CounterArguments::Unset,
        },
        FieldRule {
            field: FieldId::RespondentNotified,
            required: |s, _| counter_chain_open(s),
            missing: |s| s.respondent_notified.is_unset(),
        },
        FieldRule {
            field: FieldId::ResponseDeadlineOpen,
            required: |s, _| counter_chain_open(s) && s.respondent_notified.is_yes(),
            missing: |s| s.response_deadline_open.is_unset(),
        },
        FieldRule {
            field: FieldId::ResponseDeadlineElapsed,
            required: |s, _| {
                counter_chain_open(s)
                    && s.respondent_notified.is_yes()
                    && s.response_deadline_open.is_no()
            },
            missing: |s| s.response_deadline_elapsed.is_unset(),
        },
        FieldRule {
            field: FieldId::NoCounsel,
            required: |s, _| counter_chain_open(s) && s.respondent_notified.is_no(),
            missing: |s| s.no_counsel.is_unset(),
        },
        FieldRule {
            field: FieldId::ProsecutorIntervenes,
            required: always,
            missing: |s| s.prosecutor_intervenes.is_unset(),
        },
        FieldRule {
            field: FieldId::ProsecutorManifested,
            required: |s, _| s.prosecutor_intervenes.is_yes(),
            missing: |s| s.prosecutor_manifested.is_unset(),
        },
        FieldRule {
            field: FieldId::ProsecutorPosition,
            required: |s, _| s.prosecutor_intervenes.is_yes() && s.prosecutor_manifested.is_yes(),
            missing: |s| s.prosecutor_position == ProsecutorPosition::Unset,
        },
        FieldRule {
            field: FieldId::ProsecutorMovements,
            required: |s, _| s.prosecutor_intervenes.is_yes() && s.prosecutor_manifested.is_yes(),
            missing: |s| s.prosecutor_movements.is_empty(),
        },
        FieldRule {
            field: FieldId::ProsecutorDeadlineElapsed,
            required: |s, _| {
                s.prosecutor_intervenes.is_yes()
                    && ((s.prosecutor_manifested.is_yes()
                        && s.prosecutor_position == ProsecutorPosition::Acknowledgement)
                        || (s.prosecutor_manifested.is_no()
                            && s.remitted_to_prosecutor.is_yes()))
            },
            missing: |s| s.prosecutor_deadline_elapsed.is_unset(),
        },
        FieldRule {
            field: FieldId::RemittedToProsecutor,
            required: |s, _| s.prosecutor_intervenes.is_yes() && s.prosecutor_manifested.is_no(),
            missing: |s| s.remitted_to_prosecutor.is_unset(),
        },
    ]
}

/// Fields currently required and unmet, in rule order.
pub fn compute_field_errors(snapshot: &CaseSnapshot, outputs: &Outputs) -> BTreeSet<FieldId> {
    rules()
        .iter()
        .filter(|rule| (rule.required)(snapshot, outputs) && (rule.missing)(snapshot))
        .map(|rule| rule.field)
        .collect()
}
