//! Column names expected in the source tables and produced in the outputs.

/// KPI contact name.
pub const KPI_CONTACT: &str = "Contato";
/// KPI type/observation (school level of the lead).
pub const KPI_TYPE: &str = "Observação";
/// KPI phone number.
pub const KPI_PHONE: &str = "Whatsapp Principal";

/// Loyal customer phone number.
pub const LOYAL_PHONE: &str = "Whatsapp Principal";
/// Billing panel phone number.
pub const PANEL_PHONE: &str = "Telefone (cobrança)";

/// Output first name.
pub const NAME: &str = "Nome";
/// Output type.
pub const TYPE: &str = "Tipo";
/// Output phone number.
pub const NUMBER: &str = "Numero";
/// Phone number in the name lookup table.
pub const LOOKUP_PHONE: &str = "Telefone";

/// Placeholder for missing or too-short first names.
pub const NAME_PLACEHOLDER: &str = "CANDIDATO";

/// KPI columns kept after filtering, in output order, with their output names.
pub const KPI_PROJECTION: [(&str, &str); 3] = [
    (KPI_CONTACT, NAME),
    (KPI_TYPE, TYPE),
    (KPI_PHONE, NUMBER),
];
