//! Government welfare scheme catalogue and filtering
//!
//! The catalogue is a fixed, ordered list of Indian farmer welfare schemes.
//! Records are unstructured text, so filtering is a best-effort keyword
//! match: central schemes always pass a state filter, state schemes must
//! mention the state (or a known alias) in their title or description, and
//! the crop parameter is accepted but does not exclude records because most
//! welfare schemes are crop-agnostic.

use shared::Scheme;

/// Schemes that apply nationally and are never excluded by a state filter
const CENTRAL_SCHEMES: &[&str] = &["PM-KISAN", "PMFBY", "SMAM", "PKVY", "NFSM", "NAIS", "KCC"];

/// Catalogue of welfare schemes with keyword filtering
#[derive(Clone)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

impl SchemeCatalog {
    /// Create a catalogue from an explicit list of schemes
    pub fn new(schemes: Vec<Scheme>) -> Self {
        Self { schemes }
    }

    /// Create a catalogue with the built-in scheme list
    pub fn with_default_catalog() -> Self {
        let schemes = DEFAULT_CATALOG
            .iter()
            .map(|(title, description, eligibility, benefits, link)| Scheme {
                title: title.to_string(),
                description: description.to_string(),
                eligibility: eligibility.to_string(),
                benefits: benefits.to_string(),
                link: link.to_string(),
            })
            .collect();
        Self::new(schemes)
    }

    /// Number of records in the catalogue
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Return schemes matching the optional state and crop filters, in
    /// catalogue order.
    pub fn filter(&self, state: Option<&str>, crop: Option<&str>) -> Vec<Scheme> {
        self.schemes
            .iter()
            .filter(|scheme| {
                matches_state(scheme, state) && matches_crop(scheme, crop)
            })
            .cloned()
            .collect()
    }
}

/// True if the scheme title names a known central scheme
fn is_central(scheme: &Scheme) -> bool {
    let title = scheme.title.to_lowercase();
    CENTRAL_SCHEMES
        .iter()
        .any(|central| title.contains(&central.to_lowercase()))
}

/// Search terms for a state, covering common abbreviations found in scheme
/// titles ("UP", "MP", "HP", "AP") and flagship scheme names.
fn state_search_terms(state: &str) -> Vec<String> {
    let terms: &[&str] = match state {
        "Andhra Pradesh" => &["andhra", "ap", "ysr"],
        "Uttar Pradesh" => &["uttar", "up"],
        "Madhya Pradesh" => &["madhya", "mp"],
        "Himachal Pradesh" => &["himachal", "hp"],
        "Arunachal Pradesh" => &["arunachal"],
        "West Bengal" => &["bengal", "wb", "krishak bandhu"],
        _ => return vec![state.to_lowercase()],
    };
    terms.iter().map(|t| t.to_string()).collect()
}

fn matches_state(scheme: &Scheme, state: Option<&str>) -> bool {
    let Some(state) = state else {
        return true;
    };

    if is_central(scheme) {
        return true;
    }

    let text = format!("{} {}", scheme.title, scheme.description).to_lowercase();
    state_search_terms(state)
        .iter()
        .any(|term| text.contains(term))
}

// The crop parameter is part of the query surface but most schemes in the
// catalogue are general financial aid, so it never excludes a record that
// already matched the state.
fn matches_crop(_scheme: &Scheme, _crop: Option<&str>) -> bool {
    true
}

type SchemeEntry = (&'static str, &'static str, &'static str, &'static str, &'static str);

/// Built-in catalogue: central schemes first, then state schemes in rough
/// alphabetical order of state.
const DEFAULT_CATALOG: &[SchemeEntry] = &[
    (
        "PM-KISAN",
        "Pradhan Mantri Kisan Samman Nidhi provides financial assistance to landholding farmer families.",
        "Small and marginal farmer families with cultivable land",
        "₹6,000 per year in three equal installments",
        "https://pmkisan.gov.in/",
    ),
    (
        "PMFBY",
        "Pradhan Mantri Fasal Bima Yojana provides insurance coverage for crop loss.",
        "All farmers including sharecroppers and tenant farmers",
        "Premium: 2% for Kharif, 1.5% for Rabi, 5% for commercial crops",
        "https://pmfby.gov.in/",
    ),
    (
        "SMAM",
        "Sub-Mission on Agricultural Mechanization promotes agricultural mechanization among small and marginal farmers.",
        "Individual farmers, custom hiring centers, farmer groups",
        "Financial assistance for purchasing agricultural machinery",
        "https://cemca.org.in/smam-kisan-yojana/",
    ),
    (
        "PKVY",
        "Paramparagat Krishi Vikas Yojana promotes organic farming practices.",
        "Farmers willing to practice organic farming",
        "Financial assistance of ₹50,000 per hectare/3 years",
        "https://pmujjwalayojana.in/paramparagat-krishi-vikas-yojana/",
    ),
    (
        "NFSM",
        "National Food Security Mission increases production of rice, wheat, pulses, and coarse cereals.",
        "Farmers in identified districts across the country",
        "Assistance for seeds, treatments, nutrient management etc.",
        "https://www.nfsm.gov.in/",
    ),
    (
        "YSR Rythu Bharosa",
        "Income support for farmers in Andhra Pradesh.",
        "All resident farmers including tenant farmers.",
        "₹13,500 per year financial assistance.",
        "https://services.india.gov.in/service/detail/ysr-raithu-bharosa-new-farmer-registration-andhra-pradesh-1",
    ),
    (
        "AP Input Subsidy Scheme",
        "Support for farmers facing crop loss.",
        "Farmers affected by natural calamities.",
        "Input subsidy based on damage percentage.",
        "https://apagrisnet.gov.in/",
    ),
    (
        "Arunachal Farmer Welfare Scheme",
        "Support for agricultural modernization.",
        "Small and marginal farmers.",
        "Assistance for seeds, tools, and irrigation.",
        "https://agri.arunachal.gov.in/",
    ),
    (
        "Assam Farmer Loan Waiver Scheme",
        "Debt relief for small and marginal farmers.",
        "Farmers with overdue crop loans.",
        "Loan waiver and interest subsidy.",
        "https://diragri.assam.gov.in/",
    ),
    (
        "Assam Tractor Distribution Scheme (CTA)",
        "Provide tractors to farmer groups.",
        "Registered farmer groups.",
        "Subsidized tractors under state program.",
        "https://diragri.assam.gov.in/",
    ),
    (
        "Bihar Diesel Subsidy Scheme",
        "Subsidy for irrigation using diesel pumps.",
        "All farmers owning diesel irrigation pumps.",
        "Subsidy per litre of diesel.",
        "https://dbtagriculture.bihar.gov.in/",
    ),
    (
        "Bihar Fasal Sahayata Yojana",
        "State crop assistance instead of PMFBY.",
        "Farmers facing yield loss.",
        "₹7,500–₹10,000 per hectare compensation.",
        "https://esahkari.bihar.gov.in/coop/FSY/REG_Rabi_2425_update.aspx",
    ),
    (
        "Rajiv Gandhi Kisan Nyay Yojana",
        "Income support to promote crop productivity.",
        "Registered farmers of Chhattisgarh.",
        "₹9,000 per acre depending on crop.",
        "https://agriportal.cg.nic.in/",
    ),
    (
        "Goa Krishi Card Scheme",
        "Provides benefits and subsidies to Goan farmers.",
        "Residents engaged in agriculture.",
        "Fertilizer, seed and machinery subsidy.",
        "https://agri.goa.gov.in/",
    ),
    (
        "Mukhya Mantri Kisan Sahay Yojana",
        "Assistance for farmers during natural calamities.",
        "Farmers suffering crop damage.",
        "Up to ₹25,000 per hectare.",
        "https://ikhedut.gujarat.gov.in/",
    ),
    (
        "IKhedut Portal Schemes",
        "Unified portal for farm subsidies and tools.",
        "All Gujarat farmers.",
        "Subsidy for seeds, machinery, irrigation.",
        "https://ikhedut.gujarat.gov.in/",
    ),
    (
        "Meri Fasal Mera Byora",
        "Crop registration and subsidy distribution.",
        "All farmers of Haryana.",
        "Direct benefit transfer for crops.",
        "https://fasal.haryana.gov.in/",
    ),
    (
        "Bhavantar Bharpai Yojana",
        "Price deficit compensation.",
        "Registered farmers selling crops.",
        "Difference paid if market price < MSP.",
        "https://sarkariyojana.com/bhavantar-bharpai-yojana-haryana/",
    ),
    (
        "HP Mukhya Mantri Kisan Evam Khetihar Mazdoor Samman Nidhi",
        "Financial aid to small farmers.",
        "Small and marginal farmers.",
        "₹3,000 financial assistance.",
        "https://www.hpagrisnet.gov.in/",
    ),
    (
        "Jharkhand Krishi Rin Maafi",
        "Loan waiver for state farmers.",
        "Small and marginal farmers with crop loans.",
        "Loan waiver up to ₹50,000.",
        "https://jkrmy.jharkhand.gov.in/",
    ),
    (
        "Raitha Siri Scheme",
        "Support for millet farmers.",
        "Farmers growing minor millets.",
        "₹10,000 per hectare input subsidy.",
        "https://raitamitra.karnataka.gov.in/",
    ),
    (
        "Ganga Kalyana Scheme",
        "Irrigation borewell subsidy.",
        "Small and marginal farmers.",
        "Subsidy for drilling borewells.",
        "https://kmdc.karnataka.gov.in/31/ganga-kalyana-schmeme/en",
    ),
    (
        "Kerala Subhiksha Keralam",
        "State food security and farming mission.",
        "Farmers and farmer groups.",
        "Support for seeds, machinery, training.",
        "https://www.aims.kerala.gov.in/subhikshakeralam",
    ),
    (
        "MP Krishi Rin Samadhan Yojana",
        "Waiver and restructuring of crop loans.",
        "Small and marginal farmers.",
        "Loan relief and subsidy.",
        "https://mpkrishi.mp.gov.in/",
    ),
    (
        "Mukhya Mantri Krishak Samagra Samman Yojana",
        "Income support scheme.",
        "All registered farmers.",
        "Annual financial assistance.",
        "https://mpkrishi.mp.gov.in/",
    ),
    (
        "MahaDBT Farmer Schemes",
        "Unified portal for subsidies and farm schemes.",
        "All Maharashtra farmers.",
        "Seed, irrigation, machinery subsidy.",
        "https://mahadbt.maharashtra.gov.in/",
    ),
    (
        "Chhatrapati Shivaji Maharaj Shetkari Sanman Yojana",
        "Loan waiver program.",
        "Small farmers with overdue loans.",
        "Loan waiver up to ₹1 lakh.",
        "https://krishi.maharashtra.gov.in/",
    ),
    (
        "Manipur Agriculture Assistance Scheme",
        "Financial help during crop loss.",
        "Farmers affected by natural calamities.",
        "Relief assistance.",
        "https://agrimanipur.mn.gov.in/",
    ),
    (
        "Megha-LAMP Scheme",
        "Livelihood improvement for farmers.",
        "Rural farmers and SHGs.",
        "Training, inputs, irrigation support.",
        "https://megagriculture.gov.in/",
    ),
    (
        "New Land Use Policy (NLUP)",
        "Livelihood and agriculture modernization.",
        "Resident farmers of Mizoram.",
        "Support for farming and tools.",
        "https://mamit.nic.in/scheme/nlup-scheme/",
    ),
    (
        "Nagaland Agriculture Mechanization Scheme",
        "Support for machinery and farming tools.",
        "Small and marginal farmers.",
        "Machinery subsidy.",
        "https://agriculture.nagaland.gov.in/smam/",
    ),
    (
        "KALIA Scheme",
        "Income support and financial protection for farmers.",
        "Small, marginal farmers & landless labourers.",
        "₹10,000 yearly assistance + insurance.",
        "https://jaagrukbharat.com/kalia-portal-2024-empowering-farmers-in-odisha-with-agricultural-support-1412133",
    ),
    (
        "Punjab Smart Connect Farmers Scheme",
        "Mobile phones for farmers for agri updates.",
        "Small and marginal farmers.",
        "Free smartphones.",
        "https://farmerregistration.anaajkharid.in/",
    ),
    (
        "Rajasthan Kisan Mitra Energy Scheme",
        "Electricity subsidy for farmers.",
        "Farmers using agricultural connections.",
        "₹1,000 monthly electricity subsidy.",
        "https://agriculture.rajasthan.gov.in/",
    ),
    (
        "Organic Farming Mission",
        "Support for 100% organic agriculture.",
        "Farmers participating in organic practices.",
        "Subsidy for organic inputs.",
        "https://sikkimagrisnet.org/",
    ),
    (
        "Tamil Nadu Crop Insurance Scheme",
        "State-backed crop insurance program.",
        "Registered farmers.",
        "Compensation during crop loss.",
        "https://tnsericulture.tn.gov.in/cropinsurance",
    ),
    (
        "Rythu Bandhu Scheme",
        "Income support for farmers.",
        "All land-owning farmers.",
        "₹10,000 per acre/year.",
        "https://rythubharosa.telangana.gov.in/",
    ),
    (
        "Tripura Farmer Input Assistance",
        "Support during crop damage.",
        "Farmers affected by disasters.",
        "Input subsidy.",
        "https://agri.tripura.gov.in/",
    ),
    (
        "UP Kisan Samman Nidhi (State Top-Up)",
        "Additional farmer support.",
        "All PM-KISAN beneficiaries.",
        "Extra state financial support.",
        "https://farmerregistry.up.in/",
    ),
    (
        "UP Free Irrigation Scheme",
        "Free canal water for irrigation.",
        "All registered farmers.",
        "Zero irrigation charges.",
        "https://farmerregistry.up.in/",
    ),
    (
        "Uttarakhand Organic Agriculture Scheme",
        "Support for organic farming in hill regions.",
        "Hill farmers.",
        "Organic inputs subsidy.",
        "https://agriculture.uk.gov.in/",
    ),
    (
        "Krishak Bandhu Scheme",
        "Income support + crop insurance for state farmers.",
        "All land-owning farmers.",
        "₹10,000 yearly aid + insurance cover.",
        "https://krishakbandhu.wb.gov.in/users/sign_up",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_populated() {
        let catalog = SchemeCatalog::with_default_catalog();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), DEFAULT_CATALOG.len());
    }

    #[test]
    fn central_schemes_are_recognized() {
        let catalog = SchemeCatalog::with_default_catalog();
        let pm_kisan = catalog
            .filter(None, None)
            .into_iter()
            .find(|s| s.title == "PM-KISAN")
            .unwrap();
        assert!(is_central(&pm_kisan));
    }

    #[test]
    fn unknown_state_falls_back_to_its_own_name() {
        assert_eq!(state_search_terms("Kerala"), vec!["kerala".to_string()]);
    }

    #[test]
    fn known_states_include_abbreviations() {
        let terms = state_search_terms("Uttar Pradesh");
        assert!(terms.contains(&"up".to_string()));
        assert!(terms.contains(&"uttar".to_string()));
    }
}
