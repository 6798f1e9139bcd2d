//! Identifiers for snapshot fields the validator can flag as missing.

use serde::{Deserialize, Serialize};

/// Stable identifier for a validated form field.
///
/// Serializes to the legacy form key so UI layers can map an error
/// straight onto the corresponding input. `Ord` follows declaration
/// order, which is the validator's rule order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FieldId {
    #[serde(rename = "tipo")]
    AppealType,
    #[serde(rename = "acordo")]
    Settlement,
    #[serde(rename = "valido")]
    SettlementValid,
    #[serde(rename = "desist")]
    Withdrawal,
    #[serde(rename = "valida")]
    WithdrawalValid,
    #[serde(rename = "sigla")]
    CaseCode,
    #[serde(rename = "decrec")]
    DecisionType,
    #[serde(rename = "camaraArea")]
    ChamberArea,
    #[serde(rename = "camaraNumero")]
    ChamberNumber,
    #[serde(rename = "emaberto")]
    OriginDeadlineOpen,
    #[serde(rename = "multa")]
    Fine,
    #[serde(rename = "motivo")]
    FineReason,
    #[serde(rename = "dispensa")]
    FeeDispensed,
    #[serde(rename = "gratuidade")]
    LegalAid,
    #[serde(rename = "deferida")]
    AidGranted,
    #[serde(rename = "movdef")]
    AidGrantedMovement,
    #[serde(rename = "requerida")]
    AidRequested,
    #[serde(rename = "movped")]
    AidRequestedMovement,
    #[serde(rename = "atoincomp")]
    IncompatibleAct,
    #[serde(rename = "comprova")]
    PaymentTiming,
    #[serde(rename = "apos16")]
    AfterCutoff,
    #[serde(rename = "grumov")]
    GruGuideMovement,
    #[serde(rename = "gruProc")]
    GruCaseCheck,
    #[serde(rename = "funjusmov")]
    FunjusGuideMovement,
    #[serde(rename = "guiorig")]
    GuideOriginal,
    #[serde(rename = "funjusProc")]
    FunjusCaseCheck,
    #[serde(rename = "funjusmovComp")]
    FunjusProofMovement,
    #[serde(rename = "comptipo")]
    ProofKind,
    #[serde(rename = "codbar")]
    BarcodeCheck,
    #[serde(rename = "funjusObs")]
    FunjusJustification,
    #[serde(rename = "subscritor")]
    Signer,
    #[serde(rename = "nomemovi")]
    AppointmentMovement,
    #[serde(rename = "movis")]
    PoaMovements,
    #[serde(rename = "cadeia")]
    PoaChainComplete,
    #[serde(rename = "faltante")]
    MissingLink,
    #[serde(rename = "suspefeito")]
    SuspensiveEffect,
    #[serde(rename = "autuado")]
    Docketed,
    #[serde(rename = "exclusivi")]
    Exclusivity,
    #[serde(rename = "exclusNome")]
    ExclusivityName,
    #[serde(rename = "cadastrada")]
    Registered,
    #[serde(rename = "regular")]
    PowersRegular,
    #[serde(rename = "contrarra")]
    CounterArguments,
    #[serde(rename = "intimado")]
    RespondentNotified,
    #[serde(rename = "crraberto")]
    ResponseDeadlineOpen,
    #[serde(rename = "decursocrr")]
    ResponseDeadlineElapsed,
    #[serde(rename = "semadv")]
    NoCounsel,
    #[serde(rename = "emepe")]
    ProsecutorIntervenes,
    #[serde(rename = "mani")]
    ProsecutorManifested,
    #[serde(rename = "teormani")]
    ProsecutorPosition,
    #[serde(rename = "manimovis")]
    ProsecutorMovements,
    #[serde(rename = "decursomp")]
    ProsecutorDeadlineElapsed,
    #[serde(rename = "remetido")]
    RemittedToProsecutor,
}
