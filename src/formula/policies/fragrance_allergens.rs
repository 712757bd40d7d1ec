/// Minimum calculated percent at which a fragrance allergen must be declared
pub const DEFAULT_ALLERGEN_THRESHOLD: f64 = 0.001;

/// EU-regulated fragrance allergens by CAS registry number, with reference names
const FRAGRANCE_ALLERGEN_CAS: [(&str, &str); 32] = [
    ("5989-27-5", "Limonene"),
    ("80-56-8", "Alpha-Pinene"),
    ("127-91-3", "Beta-Pinene"),
    ("5989-54-8", "Limonene (L-)"),
    ("99-87-6", "p-Cymene"),
    ("470-82-6", "Eucalyptol"),
    ("78-70-6", "Linalool"),
    ("106-22-9", "Citronellol"),
    ("106-24-1", "Geraniol"),
    ("7540-51-4", "Citronellal"),
    ("5392-40-5", "Citral"),
    ("91-64-5", "Coumarin"),
    ("97-53-0", "Eugenol"),
    ("97-54-1", "Isoeugenol"),
    ("104-55-2", "Cinnamaldehyde"),
    ("103-41-3", "Benzyl Cinnamate"),
    ("118-58-1", "Benzyl Salicylate"),
    ("100-51-6", "Benzyl Alcohol"),
    ("120-51-4", "Benzyl Benzoate"),
    ("122-40-7", "Amyl Cinnamal"),
    ("101-86-0", "Hexyl Cinnamal"),
    ("105-13-5", "Anisyl Alcohol"),
    ("80-54-6", "Butylphenyl Methylpropional"),
    ("4602-84-0", "Farnesol"),
    ("31906-04-4", "Hydroxyisohexyl 3-Cyclohexene Carboxaldehyde"),
    ("90-17-5", "Methyl 2-Octynoate"),
    ("111-12-6", "Methyl Octine Carbonate"),
    ("107-75-5", "Hydroxycitronellal"),
    ("6259-76-3", "Hexyl Salicylate"),
    ("1222-05-5", "Galaxolide"),
    ("21145-77-7", "Tonalide"),
    ("141-10-6", "Pseudoionone"),
];

/// FragranceAllergens policy: membership test against the fixed reference set
pub struct FragranceAllergens;

impl FragranceAllergens {
    /// Returns true if the CAS number belongs to the reference set
    ///
    /// Surrounding whitespace is ignored; anything else must match exactly.
    pub fn contains(cas_number: &str) -> bool {
        let cas_number = cas_number.trim();
        FRAGRANCE_ALLERGEN_CAS
            .iter()
            .any(|(cas, _)| *cas == cas_number)
    }

    /// Reference name for an allergen CAS number
    pub fn reference_name(cas_number: &str) -> Option<&'static str> {
        let cas_number = cas_number.trim();
        FRAGRANCE_ALLERGEN_CAS
            .iter()
            .find(|(cas, _)| *cas == cas_number)
            .map(|(_, name)| *name)
    }

    /// Number of CAS numbers in the reference set
    pub fn len() -> usize {
        FRAGRANCE_ALLERGEN_CAS.len()
    }
}
