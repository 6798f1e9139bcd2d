//! The triage form snapshot and its enumerated field types.
//!
//! Every field a triage analyst can fill for one appeal lives here. The
//! snapshot is immutable per evaluation: the engine recomputes all
//! outputs from scratch on every edit, so partially filled snapshots
//! must always be representable. Serde names and literals match the
//! legacy storage payload byte for byte so stored cases round-trip
//! losslessly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{legacy_date, CaseNumberCheck, YesNo};

/// Defines a field enum whose serde representation is the exact legacy
/// form literal. Unknown literals fall back to `Unset` so an old or
/// hand-edited payload can never fail to load.
macro_rules! legacy_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $literal:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
        #[serde(into = "String", from = "String")]
        pub enum $name {
            $($variant,)*
            #[default]
            Unset,
        }

        impl $name {
            /// Legacy form literal for this value (empty when unset).
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)*
                    Self::Unset => "",
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($literal => Self::$variant,)*
                    _ => Self::Unset,
                }
            }
        }
    };
}

legacy_enum! {
    /// Which superior court the appeal is addressed to.
    AppealType {
        Special => "Especial",
        Extraordinary => "Extraordinário",
    }
}

legacy_enum! {
    /// Nature of the challenged decision.
    DecisionType {
        Collegiate => "colegiada/acórdão",
        Monocratic => "monocrática/singular",
    }
}

legacy_enum! {
    /// Subject area of the originating chamber.
    ChamberArea {
        Civil => "Cível",
        Criminal => "Crime",
    }
}

legacy_enum! {
    /// Whether the statutory filing window is doubled.
    DeadlineScheme {
        Simple => "simples",
        Doubled => "em dobro",
    }
}

legacy_enum! {
    /// Procedural fine recorded against the appellant.
    FineStatus {
        No => "não",
        Collected => "sim, recolhida",
        Uncollected => "sim, não recolhida",
    }
}

legacy_enum! {
    /// Declared reason an applied fine was not collected.
    FineReason {
        PublicTreasuryOrLegalAid => "Fazenda Pública ou justiça gratuita",
        AppealObject => "é o próprio objeto do recurso",
        Unidentified => "não identificado",
    }
}

legacy_enum! {
    /// Free-legal-aid ("gratuidade") status claimed for the case.
    LegalAid {
        NotInvoked => "não invocada",
        ClaimsBeneficiary => "já é ou afirma ser beneficiário",
        RequestedInAppeal => "requer no recurso em análise",
        AppealObject => "é o próprio objeto do recurso",
        Presumed => "presumida (defensor público, dativo ou NPJ)",
    }
}

legacy_enum! {
    /// When the fee payment proof was produced relative to the deadline.
    PaymentTiming {
        WithinDeadline => "no prazo para interposição do recurso",
        NextBusinessDay => "no dia útil seguinte ao término do prazo",
        Later => "posteriormente",
        Absent => "ausente",
    }
}

legacy_enum! {
    /// Kind of payment proof attached for the FUNJUS guide.
    ProofKind {
        Payment => "de pagamento",
        Scheduling => "de agendamento",
    }
}

legacy_enum! {
    /// Barcode cross-check between FUNJUS guide and proof.
    BarcodeCheck {
        Matches => "confere",
        DivergesOrMissing => "diverge ou guia ausente",
    }
}

legacy_enum! {
    /// Sub-classification of a partial FUNJUS payment.
    PartialKind {
        No => "não",
        PartialLegalAid => "JG parcial",
        CohabLondrina => "COHAB Londrina",
        Other => "outros",
    }
}

legacy_enum! {
    /// Who signed the appeal petition.
    Signer {
        PrivateCounsel => "advogado particular",
        PublicAttorney => "procurador público",
        AppointedAttorney => "procurador nomeado",
        OwnCause => "advogado em causa própria",
    }
}

legacy_enum! {
    /// Which link of the power-of-attorney chain is missing.
    MissingLink {
        Signer => "ao próprio subscritor",
        OtherLink => "a outro elo da cadeia",
    }
}

legacy_enum! {
    /// How suspensive effect was requested, if at all.
    SuspensiveEffect {
        NotRequested => "não requerido",
        InAppealBody => "requerido no corpo do recurso",
        SeparatePetition => "requerido em petição apartada",
    }
}

legacy_enum! {
    /// Exclusivity-of-notice request status.
    Exclusivity {
        Requested => "requerida",
        NotRequested => "não requerida",
    }
}

legacy_enum! {
    /// Counter-argument filing status for the respondents.
    CounterArguments {
        Filed => "apresentadas",
        SomeMissing => "ausente alguma",
        Absent => "ausentes",
    }
}

legacy_enum! {
    /// Recorded position of the prosecutor's manifestation.
    ProsecutorPosition {
        Acknowledgement => "mera ciência",
        ForAdmission => "pela admissão",
        AgainstAdmission => "pela inadmissão",
        NoInterest => "ausência de interesse",
    }
}

/// Snapshot of one appeal's triage form.
///
/// All fields carry safe defaults; the engine tolerates any partial
/// combination. Serde names are the legacy storage keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseSnapshot {
    // ── Appeal classification ───────────────────────────────────────
    #[serde(rename = "tipo")]
    pub appeal_type: AppealType,
    #[serde(rename = "decrec")]
    pub decision_type: DecisionType,
    /// Free-text chamber label kept from older payloads.
    #[serde(rename = "camara")]
    pub chamber: String,
    #[serde(rename = "camaraArea")]
    pub chamber_area: ChamberArea,
    #[serde(rename = "camaraNumero")]
    pub chamber_number: String,
    #[serde(rename = "sigla")]
    pub case_code: String,

    // ── Settlement / withdrawal ─────────────────────────────────────
    #[serde(rename = "acordo")]
    pub settlement: YesNo,
    #[serde(rename = "valido")]
    pub settlement_valid: YesNo,
    #[serde(rename = "desist")]
    pub withdrawal: YesNo,
    #[serde(rename = "valida")]
    pub withdrawal_valid: YesNo,

    // ── Dates and deadline facts ────────────────────────────────────
    #[serde(rename = "interp", with = "legacy_date")]
    pub filing_date: Option<NaiveDate>,
    #[serde(rename = "envio", with = "legacy_date")]
    pub dispatch_date: Option<NaiveDate>,
    /// Whether an electronic read event exists for the notice.
    #[serde(rename = "consulta")]
    pub electronic_read: YesNo,
    #[serde(rename = "leitura", with = "legacy_date")]
    pub read_date: Option<NaiveDate>,
    #[serde(rename = "emdobro")]
    pub deadline_scheme: DeadlineScheme,
    /// Minors-protection statute (ECA) case: 10 calendar-day deadline.
    #[serde(rename = "eca")]
    pub minors_statute: YesNo,
    #[serde(rename = "emaberto")]
    pub origin_deadline_open: YesNo,
    /// Housing-finance (SFH) case routed to a dedicated filter.
    #[serde(rename = "sfh")]
    pub sfh: YesNo,

    // ── Fine ────────────────────────────────────────────────────────
    #[serde(rename = "multa")]
    pub fine: FineStatus,
    #[serde(rename = "motivo")]
    pub fine_reason: FineReason,

    // ── Fees and legal aid ──────────────────────────────────────────
    /// Public/prosecutorial entity dispensation (CPC art. 1.007 §1º).
    #[serde(rename = "dispensa")]
    pub fee_dispensed: YesNo,
    #[serde(rename = "gratuidade")]
    pub legal_aid: LegalAid,
    #[serde(rename = "deferida")]
    pub aid_granted: YesNo,
    #[serde(rename = "movdef")]
    pub aid_granted_movement: String,
    #[serde(rename = "requerida")]
    pub aid_requested: YesNo,
    #[serde(rename = "movped")]
    pub aid_requested_movement: String,
    /// Act incompatible with claimed legal aid (e.g. paying other fees).
    #[serde(rename = "atoincomp")]
    pub incompatible_act: YesNo,
    #[serde(rename = "comprova")]
    pub payment_timing: PaymentTiming,
    /// Payment on the following business day made after the 16h cutoff.
    #[serde(rename = "apos16")]
    pub after_cutoff: YesNo,

    // ── Superior-court fee (GRU) evidence ───────────────────────────
    #[serde(rename = "grumov")]
    pub gru_guide_movement: String,
    #[serde(rename = "grumovComp")]
    pub gru_proof_movement: String,
    #[serde(rename = "gruProc")]
    pub gru_case_check: CaseNumberCheck,
    #[serde(rename = "valorst")]
    pub superior_paid: String,

    // ── Ancillary fee (FUNJUS) evidence ─────────────────────────────
    #[serde(rename = "guiavinc")]
    pub guide_linked: YesNo,
    #[serde(rename = "guia")]
    pub funjus_guide: YesNo,
    #[serde(rename = "funjusmov")]
    pub funjus_guide_movement: String,
    #[serde(rename = "funjusmovComp")]
    pub funjus_proof_movement: String,
    #[serde(rename = "funjusProc")]
    pub funjus_case_check: CaseNumberCheck,
    #[serde(rename = "guiorig")]
    pub guide_original: YesNo,
    #[serde(rename = "comp")]
    pub funjus_proof: YesNo,
    #[serde(rename = "comptipo")]
    pub proof_kind: ProofKind,
    #[serde(rename = "codbar")]
    pub barcode_check: BarcodeCheck,
    #[serde(rename = "valorfj")]
    pub funjus_paid: String,
    #[serde(rename = "funjusObs")]
    pub funjus_justification: String,
    #[serde(rename = "parcialTipo")]
    pub partial_kind: PartialKind,
    #[serde(rename = "parcialOutro")]
    pub partial_other: String,
    #[serde(rename = "usarIntegral")]
    pub use_full_value: bool,

    // ── Representation ──────────────────────────────────────────────
    #[serde(rename = "subscritor")]
    pub signer: Signer,
    #[serde(rename = "nomemovi")]
    pub appointment_movement: String,
    #[serde(rename = "movis")]
    pub poa_movements: String,
    #[serde(rename = "cadeia")]
    pub poa_chain_complete: YesNo,
    #[serde(rename = "faltante")]
    pub missing_link: MissingLink,

    // ── Suspensive effect / exclusivity ─────────────────────────────
    #[serde(rename = "suspefeito")]
    pub suspensive_effect: SuspensiveEffect,
    #[serde(rename = "autuado")]
    pub docketed: YesNo,
    #[serde(rename = "exclusivi")]
    pub exclusivity: Exclusivity,
    #[serde(rename = "exclusNome")]
    pub exclusivity_name: String,
    #[serde(rename = "cadastrada")]
    pub registered: YesNo,
    #[serde(rename = "regular")]
    pub powers_regular: YesNo,

    // ── Counter-arguments ───────────────────────────────────────────
    #[serde(rename = "contrarra")]
    pub counter_arguments: CounterArguments,
    #[serde(rename = "contramovis")]
    pub counter_movements: String,
    #[serde(rename = "intimado")]
    pub respondent_notified: YesNo,
    #[serde(rename = "intimovi")]
    pub notification_movement: String,
    #[serde(rename = "crraberto")]
    pub response_deadline_open: YesNo,
    #[serde(rename = "decursocrr")]
    pub response_deadline_elapsed: YesNo,
    #[serde(rename = "semadv")]
    pub no_counsel: YesNo,

    // ── Prosecutor (MP) ─────────────────────────────────────────────
    #[serde(rename = "emepe")]
    pub prosecutor_intervenes: YesNo,
    #[serde(rename = "mani")]
    pub prosecutor_manifested: YesNo,
    #[serde(rename = "teormani")]
    pub prosecutor_position: ProsecutorPosition,
    #[serde(rename = "manimovis")]
    pub prosecutor_movements: String,
    #[serde(rename = "decursomp")]
    pub prosecutor_deadline_elapsed: YesNo,
    #[serde(rename = "remetido")]
    pub remitted_to_prosecutor: YesNo,

    // ── Free-text notes ─────────────────────────────────────────────
    #[serde(rename = "anotacoes")]
    pub annotations: String,
}

impl Default for CaseSnapshot {
    fn default() -> Self {
        Self {
            appeal_type: AppealType::Unset,
            decision_type: DecisionType::Unset,
            chamber: String::new(),
            chamber_area: ChamberArea::Unset,
            chamber_number: String::new(),
            case_code: String::new(),
            settlement: YesNo::Unset,
            settlement_valid: YesNo::Unset,
            withdrawal: YesNo::Unset,
            withdrawal_valid: YesNo::Unset,
            filing_date: None,
            dispatch_date: None,
            // The blank form answers "no" for these three.
            electronic_read: YesNo::No,
            read_date: None,
            deadline_scheme: DeadlineScheme::Unset,
            minors_statute: YesNo::No,
            origin_deadline_open: YesNo::Unset,
            sfh: YesNo::No,
            fine: FineStatus::Unset,
            fine_reason: FineReason::Unset,
            fee_dispensed: YesNo::Unset,
            legal_aid: LegalAid::Unset,
            aid_granted: YesNo::Unset,
            aid_granted_movement: String::new(),
            aid_requested: YesNo::Unset,
            aid_requested_movement: String::new(),
            incompatible_act: YesNo::Unset,
            payment_timing: PaymentTiming::Unset,
            after_cutoff: YesNo::Unset,
            gru_guide_movement: String::new(),
            gru_proof_movement: String::new(),
            gru_case_check: CaseNumberCheck::Unset,
            superior_paid: String::new(),
            guide_linked: YesNo::Unset,
            funjus_guide: YesNo::Unset,
            funjus_guide_movement: String::new(),
            funjus_proof_movement: String::new(),
            funjus_case_check: CaseNumberCheck::Unset,
            guide_original: YesNo::Unset,
            funjus_proof: YesNo::Unset,
            proof_kind: ProofKind::Unset,
            barcode_check: BarcodeCheck::Unset,
            funjus_paid: String::new(),
            funjus_justification: String::new(),
            partial_kind: PartialKind::Unset,
            partial_other: String::new(),
            use_full_value: false,
            signer: Signer::Unset,
            appointment_movement: String::new(),
            poa_movements: String::new(),
            poa_chain_complete: YesNo::Unset,
            missing_link: MissingLink::Unset,
            suspensive_effect: SuspensiveEffect::Unset,
            docketed: YesNo::Unset,
            exclusivity: Exclusivity::Unset,
            exclusivity_name: String::new(),
            registered: YesNo::Unset,
            powers_regular: YesNo::Unset,
            counter_arguments: CounterArguments::Unset,
            counter_movements: String::new(),
            respondent_notified: YesNo::Unset,
            notification_movement: String::new(),
            response_deadline_open: YesNo::Unset,
            response_deadline_elapsed: YesNo::Unset,
            no_counsel: YesNo::Unset,
            prosecutor_intervenes: YesNo::Unset,
            prosecutor_manifested: YesNo::Unset,
            prosecutor_position: ProsecutorPosition::Unset,
            prosecutor_movements: String::new(),
            prosecutor_deadline_elapsed: YesNo::Unset,
            remitted_to_prosecutor: YesNo::Unset,
            annotations: String::new(),
        }
    }
}

impl CaseSnapshot {
    /// Read date to use for the notification presumption: only a read
    /// event explicitly recorded on the form counts.
    pub fn effective_read_date(&self) -> Option<NaiveDate> {
        if self.electronic_read.is_yes() {
            self.read_date
        } else {
            None
        }
    }

    /// Load a snapshot from a legacy storage payload, applying the
    /// documented field renames from older schema versions. This is the
    /// one sanctioned snapshot-transition function; derivation itself
    /// never mutates a snapshot.
    pub fn from_legacy_json(raw: &serde_json::Value) -> Self {
        let mut snapshot: CaseSnapshot =
            serde_json::from_value(raw.clone()).unwrap_or_default();

        let text = |key: &str| -> String {
            raw.get(key)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };
        let join_movements = |guide: String, proof: String| -> String {
            if !guide.is_empty() && !proof.is_empty() && guide != proof {
                format!("{guide}; {proof}")
            } else if !guide.is_empty() {
                guide
            } else {
                proof
            }
        };

        // `parcial` predates `parcialTipo`; "sim" meant the COHAB program.
        if snapshot.partial_kind == PartialKind::Unset {
            snapshot.partial_kind = match text("parcial").as_str() {
                "sim" => PartialKind::CohabLondrina,
                "não" => PartialKind::No,
                _ => PartialKind::Unset,
            };
        }
        // `guiast`/`compst` were the pre-split GRU movement fields.
        if snapshot.gru_guide_movement.is_empty() {
            snapshot.gru_guide_movement = join_movements(text("guiast"), text("compst"));
        }
        if snapshot.gru_proof_movement.is_empty() {
            snapshot.gru_proof_movement = snapshot.gru_guide_movement.clone();
        }
        // `guiamov`/`compmov` were the pre-split FUNJUS movement fields.
        if snapshot.funjus_guide_movement.is_empty() {
            snapshot.funjus_guide_movement = join_movements(text("guiamov"), text("compmov"));
        }
        if snapshot.funjus_proof_movement.is_empty() {
            snapshot.funjus_proof_movement = snapshot.funjus_guide_movement.clone();
        }
        if snapshot.electronic_read.is_unset() {
            snapshot.electronic_read = YesNo::No;
        }

        snapshot
    }
}
