use crate::core::distribute::Strategy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

/// The stock query: open, untriaged front-end bugs filed since 2022 that have
/// no triage owner on the team. Overridable with --rest-url.
pub const DEFAULT_REST_URL: &str = "https://bugzilla.mozilla.org/rest/bug?include_fields=id,creator,summary,status&bug_status=UNCONFIRMED&bug_status=NEW&bug_status=ASSIGNED&bug_status=REOPENED&classification=Client%20Software&classification=Developer%20Infrastructure&classification=Components&classification=Server%20Software&classification=Other&f1=OP&f10=component&f11=component&f12=component&f13=component&f14=component&f15=component&f16=component&f17=component&f18=component&f19=product&f2=triage_owner&f20=bug_type&f21=OP&f22=priority&f23=bug_severity&f24=CP&f3=triage_owner&f4=triage_owner&f5=triage_owner&f6=triage_owner&f7=triage_owner&f8=CP&f9=creation_ts&j1=OR&j21=OR&keywords=meta&keywords_type=nowords&o10=notequals&o11=notequals&o12=notequals&o13=notequals&o14=notequals&o15=notequals&o16=notequals&o17=notequals&o18=notequals&o19=notequals&o2=equals&o20=notequals&o22=equals&o23=equals&o3=equals&o4=equals&o5=equals&o6=equals&o7=equals&o9=greaterthan&resolution=---&v10=File%20Handling%20&v11=%20mozscreenshots&v12=Picture-in-Picture%20&v13=Shopping&v14=New%20Tab%20Page&v15=Themes&v16=Theme&v17=Tabbed%20Browser&v18=General&v19=Flowstate&v2=mhowell%40mozilla.com&v20=enhancement&v22=--&v23=--&v3=mconley%40mozilla.com&v4=gijskruitbosch%2Bbugs%40gmail.com&v5=jhirsch%40mozilla.com&v6=cmeador%40mozilla.com&v7=achurchwell%40mozilla.com&v9=2022-01-01";

#[derive(Debug, Clone, Parser)]
#[command(name = "triage-carpool")]
#[command(about = "Finds the bugs for triage and distributes them evenly to the team")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = DEFAULT_REST_URL,
        help = "Optional override for the Bugzilla REST URL"
    )]
    pub rest_url: String,

    #[arg(long, value_delimiter = ',', help = "Bugs to skip")]
    pub skip_bugs: Vec<u64>,

    #[arg(long, default_value = "team.json", help = "Team JSON file")]
    pub team_file: String,

    #[arg(long, value_enum, default_value_t = Strategy::LeastLoaded)]
    pub strategy: Strategy,

    #[arg(long, help = "Fixed RNG seed for reproducible assignments")]
    pub seed: Option<u64>,

    #[arg(long, help = "Also save the rendered email to this file")]
    pub output_path: Option<String>,

    #[arg(long, help = "Print debugging messages to the console")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn rest_url(&self) -> &str {
        &self.rest_url
    }

    fn skip_bugs(&self) -> &[u64] {
        &self.skip_bugs
    }

    fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("rest_url", &self.rest_url)?;
        validate_path("team_file", &self.team_file)?;
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        Ok(())
    }
}
