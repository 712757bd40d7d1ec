/// The unit of computation: one INCI substance inside one raw material
///
/// Every document view is a reduction or sort over a list of these.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedComponentRow {
    /// Normalized ingredient code of the raw material
    pub base_code: String,
    pub material_name: String,
    /// Raw material's share of the product, in percent
    pub raw_weight_percent: f64,
    /// Label of the row: English INCI name, else Korean, else `Unknown`;
    /// the material name for a placeholder row
    pub inci_name: String,
    /// English INCI name as declared, used where only the English name is printed
    pub inci_name_en: Option<String>,
    /// Component's share within the raw material, in percent
    pub ratio_in_raw: f64,
    /// Component's share of the product, in percent
    pub calculated_percent: f64,
    pub function: Option<String>,
    pub cas_number: Option<String>,
    /// True when the raw material has no declared components and this row
    /// stands for the whole material
    pub placeholder: bool,
}
