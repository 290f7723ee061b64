//! Two-language string table. Every user-facing string goes through `t`;
//! unknown keys fall back to the key itself so a missing entry is visible in
//! the UI instead of panicking.

use std::collections::HashMap;

use leptos::prelude::*;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use web_sys::window;

const LANGUAGE_KEY: &str = "s-eye.language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Language {
    En,
    Sv,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Sv => "sv",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "sv" => Some(Language::Sv),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Sv => "Svenska",
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::En, Language::Sv]
    }

    fn column(&self) -> usize {
        match self {
            Language::En => 0,
            Language::Sv => 1,
        }
    }
}

/// App-wide language selection, persisted across sessions.
#[derive(Clone, Copy)]
pub struct LanguageService {
    pub current: RwSignal<Language>,
}

impl LanguageService {
    pub fn new() -> Self {
        let stored = window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LANGUAGE_KEY).ok().flatten())
            .and_then(|code| Language::from_code(&code))
            .unwrap_or(Language::En);
        Self {
            current: RwSignal::new(stored),
        }
    }

    pub fn set(&self, language: Language) {
        self.current.set(language);
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(LANGUAGE_KEY, language.code());
        }
    }
}

pub fn use_language() -> LanguageService {
    use_context::<LanguageService>().expect("LanguageService not found in context")
}

/// Look up a translated string: `[en, sv]` per key.
pub fn t(language: Language, key: &'static str) -> &'static str {
    STRINGS
        .get(key)
        .map(|pair| pair[language.column()])
        .unwrap_or(key)
}

static STRINGS: Lazy<HashMap<&'static str, [&'static str; 2]>> = Lazy::new(|| {
    HashMap::from([
        // navigation
        ("nav.overview", ["Overview", "Översikt"]),
        ("nav.dataSources", ["Data Sources", "Datakällor"]),
        ("nav.reports", ["Reports", "Rapporter"]),
        ("nav.team", ["Clients", "Kunder"]),
        ("nav.signOut", ["Sign out", "Logga ut"]),
        ("nav.premium", ["Premium", "Premium"]),
        // dashboard
        ("dashboard.title", ["Marketing Dashboard", "Marknadsföringsdashboard"]),
        (
            "dashboard.welcome",
            [
                "Welcome to your marketing dashboard",
                "Välkommen till din marknadsföringsdashboard",
            ],
        ),
        ("dashboard.summary", ["Summary", "Sammanfattning"]),
        ("dashboard.performance", ["Performance", "Prestanda"]),
        ("dashboard.trends", ["Trends", "Trender"]),
        ("dashboard.actions", ["Quick Actions", "Snabbåtgärder"]),
        ("dashboard.timeframe", ["Timeframe", "Tidsperiod"]),
        (
            "dashboard.vsPrevious",
            ["vs previous period", "jmf föregående period"],
        ),
        (
            "dashboard.incompleteSetup",
            ["Your setup is incomplete", "Din konfiguration är ofullständig"],
        ),
        (
            "dashboard.completeSetup",
            ["Complete setup", "Slutför konfiguration"],
        ),
        ("dashboard.dataSources", ["Data Sources", "Datakällor"]),
        (
            "dashboard.connectSource",
            ["Connect Data Source", "Anslut datakälla"],
        ),
        (
            "dashboard.generateReport",
            ["Generate Report", "Generera rapport"],
        ),
        ("dashboard.viewAll", ["View All", "Visa alla"]),
        ("dashboard.connected", ["Connected", "Ansluten"]),
        // metrics
        ("metric.impressions", ["Impressions", "Visningar"]),
        ("metric.clicks", ["Clicks", "Klick"]),
        ("metric.conversions", ["Conversions", "Konverteringar"]),
        ("metric.ctr", ["CTR", "CTR"]),
        // time periods
        ("period.7days", ["Last 7 Days", "Senaste 7 dagarna"]),
        ("period.30days", ["Last 30 Days", "Senaste 30 dagarna"]),
        ("period.90days", ["Last 90 Days", "Senaste 90 dagarna"]),
        ("period.ytd", ["Year to Date", "Hittills i år"]),
        ("period.custom", ["Custom Range", "Anpassat intervall"]),
        // platform dashboard
        ("platform.createAd", ["Create Ad", "Skapa annons"]),
        (
            "platform.campaigns",
            ["Active Campaigns", "Aktiva kampanjer"],
        ),
        ("platform.spend", ["Spend This Month", "Utgifter denna månad"]),
        // ad form
        ("form.title", ["Create New Ad", "Skapa ny annons"]),
        ("form.name", ["Campaign Name", "Kampanjnamn"]),
        ("form.headline", ["Headline", "Rubrik"]),
        ("form.description", ["Description", "Beskrivning"]),
        ("form.targetUrl", ["Target URL", "Mål-URL"]),
        ("form.budget", ["Daily Budget", "Daglig budget"]),
        ("form.startDate", ["Start Date", "Startdatum"]),
        ("form.endDate", ["End Date (optional)", "Slutdatum (valfritt)"]),
        ("form.keywords", ["Keywords", "Nyckelord"]),
        ("form.adType", ["Ad Type", "Annonstyp"]),
        ("form.platform", ["Platform", "Plattform"]),
        ("form.objective", ["Campaign Objective", "Kampanjmål"]),
        (
            "form.placement",
            ["Placement (optional)", "Placering (valfritt)"],
        ),
        ("form.submit", ["Create Ad", "Skapa annons"]),
        ("form.cancel", ["Cancel", "Avbryt"]),
        (
            "form.success",
            ["Your ad has been created", "Din annons har skapats"],
        ),
        (
            "form.premiumRequired",
            ["Premium subscription required", "Premiumprenumeration krävs"],
        ),
        (
            "form.premiumHint",
            [
                "Upgrade your plan to create ads on this platform",
                "Uppgradera din plan för att skapa annonser på denna plattform",
            ],
        ),
        ("form.backToDashboard", ["Back to dashboard", "Tillbaka till översikten"]),
        // form tabs
        ("form.tab.basic", ["Basics", "Grunder"]),
        ("form.tab.creative", ["Creative", "Annonsmaterial"]),
        ("form.tab.keywords", ["Keywords", "Nyckelord"]),
        ("form.tab.targeting", ["Targeting", "Målgrupp"]),
        // field errors
        (
            "error.name.tooShort",
            [
                "Name must be at least 2 characters",
                "Namnet måste vara minst 2 tecken",
            ],
        ),
        (
            "error.headline.tooShort",
            [
                "Headline must be at least 5 characters",
                "Rubriken måste vara minst 5 tecken",
            ],
        ),
        (
            "error.description.tooShort",
            [
                "Description must be at least 10 characters",
                "Beskrivningen måste vara minst 10 tecken",
            ],
        ),
        (
            "error.invalidUrl",
            ["Please enter a valid URL", "Ange en giltig URL"],
        ),
        (
            "error.required",
            ["This field is required", "Detta fält är obligatoriskt"],
        ),
        (
            "error.invalidEnum",
            [
                "Choose one of the listed options",
                "Välj ett av de listade alternativen",
            ],
        ),
        (
            "error.fixFields",
            [
                "Please fix the highlighted fields",
                "Åtgärda de markerade fälten",
            ],
        ),
        // auth
        ("login.title", ["Sign in to S-EYE", "Logga in på S-EYE"]),
        ("login.email", ["Email", "E-post"]),
        ("login.password", ["Password", "Lösenord"]),
        ("login.submit", ["Sign in", "Logga in"]),
        ("login.loading", ["Signing in...", "Loggar in..."]),
        ("login.success", ["Welcome back!", "Välkommen tillbaka!"]),
        (
            "login.noAccount",
            ["Don't have an account?", "Har du inget konto?"],
        ),
        ("login.signupLink", ["Sign up", "Registrera dig"]),
        ("signup.title", ["Create your account", "Skapa ditt konto"]),
        ("signup.name", ["Full name", "Fullständigt namn"]),
        ("signup.company", ["Company", "Företag"]),
        ("signup.submit", ["Create account", "Skapa konto"]),
        (
            "signup.haveAccount",
            ["Already have an account?", "Har du redan ett konto?"],
        ),
        ("signup.loginLink", ["Sign in", "Logga in"]),
        (
            "signup.success",
            ["Account created, let's get you set up", "Kontot har skapats, nu sätter vi igång"],
        ),
        // landing
        (
            "landing.headline",
            [
                "All your marketing data in one place",
                "All din marknadsföringsdata på ett ställe",
            ],
        ),
        (
            "landing.sub",
            [
                "Connect your ad platforms and see performance, attribution and clients in a single dashboard.",
                "Anslut dina annonsplattformar och se prestanda, attribution och kunder i en enda dashboard.",
            ],
        ),
        ("landing.cta", ["Get started", "Kom igång"]),
        ("landing.login", ["Sign in", "Logga in"]),
        // onboarding
        ("onboarding.title", ["Set up your workspace", "Konfigurera din arbetsyta"]),
        ("onboarding.stepOf", ["Step", "Steg"]),
        ("onboarding.next", ["Next", "Nästa"]),
        ("onboarding.finish", ["Go to dashboard", "Gå till dashboarden"]),
        (
            "onboarding.welcome.title",
            ["Welcome to S-EYE", "Välkommen till S-EYE"],
        ),
        (
            "onboarding.welcome.body",
            [
                "We'll connect your data sources and tune your reports in a few quick steps.",
                "Vi ansluter dina datakällor och ställer in dina rapporter i några snabba steg.",
            ],
        ),
        (
            "onboarding.sources.title",
            ["Connect your data sources", "Anslut dina datakällor"],
        ),
        (
            "onboarding.sources.body",
            [
                "Pick the ad platforms you want to pull data from. You can add more later.",
                "Välj de annonsplattformar du vill hämta data från. Du kan lägga till fler senare.",
            ],
        ),
        (
            "onboarding.preferences.title",
            ["Report preferences", "Rapportinställningar"],
        ),
        (
            "onboarding.preferences.frequency",
            ["Report frequency", "Rapportfrekvens"],
        ),
        (
            "onboarding.preferences.defaultView",
            ["Default dashboard view", "Standardvy för dashboard"],
        ),
        (
            "onboarding.complete.title",
            ["You're all set!", "Allt är klart!"],
        ),
        (
            "onboarding.complete.body",
            [
                "Your workspace is ready. Head to the dashboard to see your data.",
                "Din arbetsyta är redo. Gå till dashboarden för att se din data.",
            ],
        ),
        ("frequency.weekly", ["Weekly", "Varje vecka"]),
        ("frequency.monthly", ["Monthly", "Varje månad"]),
        ("frequency.quarterly", ["Quarterly", "Varje kvartal"]),
        ("view.overview", ["Overview", "Översikt"]),
        ("view.performance", ["Performance", "Prestanda"]),
        ("view.campaigns", ["Campaigns", "Kampanjer"]),
        // attribution report
        ("reports.title", ["Attribution Funnel", "Attributionstratt"]),
        (
            "reports.description",
            [
                "Analyze the customer journey and conversion paths",
                "Analysera kundresan och konverteringsvägar",
            ],
        ),
        (
            "reports.attribution",
            ["Attribution Model", "Attributionsmodell"],
        ),
        ("reports.period", ["Time Period", "Tidsperiod"]),
        (
            "reports.commonPaths",
            ["Common Conversion Paths", "Vanliga konverteringsvägar"],
        ),
        ("reports.path", ["Path", "Väg"]),
        ("reports.conversions", ["Conversions", "Konverteringar"]),
        ("reports.conversionRate", ["Conv. Rate", "Konv. frekvens"]),
        ("reports.averageValue", ["Avg. Value", "Genomsn. värde"]),
        ("reports.download", ["Download Report", "Ladda ner rapport"]),
        (
            "reports.downloadSuccess",
            ["Report download started", "Rapportnedladdning startad"],
        ),
        ("model.last-click", ["Last Click", "Sista klicket"]),
        ("model.first-click", ["First Click", "Första klicket"]),
        ("model.linear", ["Linear", "Linjär"]),
        ("model.time-decay", ["Time Decay", "Tidsavklingning"]),
        ("model.position-based", ["Position Based", "Positionsbaserad"]),
        // client management
        ("team.title", ["Client Management", "Kundhantering"]),
        (
            "team.description",
            [
                "Manage your client accounts and performance",
                "Hantera dina kundkonton och deras resultat",
            ],
        ),
        ("team.search", ["Search clients...", "Sök kunder..."]),
        ("team.totalClients", ["Total Clients", "Antal kunder"]),
        ("team.activeClients", ["Active Clients", "Aktiva kunder"]),
        ("team.totalSpend", ["Total Ad Spend", "Total annonsbudget"]),
        ("team.averageRoi", ["Average ROI", "Genomsnittlig ROI"]),
        ("team.col.client", ["Client", "Kund"]),
        ("team.col.industry", ["Industry", "Bransch"]),
        ("team.col.status", ["Status", "Status"]),
        ("team.col.adSpend", ["Ad Spend", "Annonsbudget"]),
        ("team.col.campaigns", ["Campaigns", "Kampanjer"]),
        ("team.col.roi", ["ROI", "ROI"]),
        ("team.status.active", ["Active", "Aktiv"]),
        ("team.status.pending", ["Pending", "Väntande"]),
        ("team.status.inactive", ["Inactive", "Inaktiv"]),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve_in_both_languages() {
        assert_eq!(t(Language::En, "dashboard.summary"), "Summary");
        assert_eq!(t(Language::Sv, "dashboard.summary"), "Sammanfattning");
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        assert_eq!(t(Language::En, "no.such.key"), "no.such.key");
    }

    #[test]
    fn every_entry_has_both_columns_filled() {
        for (key, [en, sv]) in STRINGS.iter() {
            assert!(!en.is_empty(), "empty en string for {key}");
            assert!(!sv.is_empty(), "empty sv string for {key}");
        }
    }

    #[test]
    fn language_codes_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("de"), None);
    }
}
