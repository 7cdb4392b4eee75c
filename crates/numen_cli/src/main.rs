use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::{Datelike, Days, NaiveDate};
use clap::{Parser, Subcommand};
use numen_base::karmic::debt_meaning;
use numen_base::pair::ALL_RELATIONSHIP_KINDS;
use numen_base::pinnacle::age_in_year;
use numen_base::{
    Challenge, CycleSnapshot, IdentityProfile, LetterSystem, Pinnacle, RelationshipKind,
    challenge_at_age, challenges, is_master, karmic_path, life_path, lo_shu_grid,
    personal_year_sequence, pinnacle_at_age, pinnacles, reduce,
};
use numen_config::{ConfigError, DEFAULT_LOG_FILTER, NumenConfig};
use numen_ops::{
    analyze_address, analyze_business_name, analyze_landline, analyze_office_address,
    analyze_phone, analyze_plate, communication_impact, compare_addresses, compare_name_change,
    name_suggestions, rank_addresses, rank_phones, vehicle_compatibility,
};
use numen_rs::{Person, parse_date, reading_with};
use numen_search::{
    ALL_PURPOSES, LuckyDate, Purpose, lucky_dates_for_purpose, next_lucky_date,
    search_lucky_dates,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding a `tracing_subscriber` filter directive.
const LOG_ENV: &str = "NUMEN_LOG";

/// Upper bound for `cycles --years`.
const MAX_SEQUENCE_YEARS: i64 = 200;

#[derive(Parser)]
#[command(name = "numen", about = "Numen numerology CLI")]
struct Cli {
    /// Print results as pretty JSON
    #[arg(long, global = true)]
    json: bool,
    /// TOML config file (falls back to $NUMEN_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a number to a single digit
    Reduce {
        number: u32,
        /// Do not stop at 11, 22 or 33
        #[arg(long)]
        no_masters: bool,
    },
    /// Core identity numbers for a name and birth date
    Profile {
        /// Full birth name
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        birth: NaiveDate,
    },
    /// Personal and universal cycles on a date
    Cycles {
        /// Birth date (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        birth: NaiveDate,
        /// Target date (default: today)
        #[arg(long, value_parser = parse_date_arg)]
        on: Option<NaiveDate>,
        /// Also list this many personal years starting at the target year
        #[arg(
            long,
            default_value = "0",
            value_parser = clap::value_parser!(u32).range(0..=MAX_SEQUENCE_YEARS)
        )]
        years: u32,
    },
    /// Lo Shu grid from a birth date
    Loshu {
        /// Birth date (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        birth: NaiveDate,
    },
    /// Lucky dates in a range
    Lucky {
        /// Full birth name
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        birth: NaiveDate,
        /// First day of the range (default: today)
        #[arg(long, value_parser = parse_date_arg)]
        from: Option<NaiveDate>,
        /// Last day of the range (default: from + configured search days)
        #[arg(long, value_parser = parse_date_arg)]
        to: Option<NaiveDate>,
        /// Only report the earliest lucky date within the configured horizon
        #[arg(long, conflicts_with = "to")]
        next: bool,
    },
    /// Lucky dates in one month for a purpose preset
    Purpose {
        /// Full birth name
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        birth: NaiveDate,
        /// business, romance, travel, health or general
        #[arg(value_parser = parse_purpose)]
        purpose: Purpose,
        year: i32,
        /// Month (1-12)
        month: u32,
    },
    /// Address vibration, comparison or ranking
    Address {
        #[arg(required = true)]
        addresses: Vec<String>,
        /// Include the business vibration
        #[arg(long)]
        office: bool,
        /// Compare exactly two addresses
        #[arg(long)]
        compare: bool,
        /// Rank the addresses against this birth date's Life Path
        #[arg(long, value_parser = parse_date_arg)]
        birth: Option<NaiveDate>,
    },
    /// Phone number vibration, ranking or impact
    Phone {
        #[arg(required = true)]
        phones: Vec<String>,
        /// Include stability and business suitability
        #[arg(long)]
        landline: bool,
        /// Rank the numbers against this birth date's Life Path
        #[arg(long, value_parser = parse_date_arg)]
        birth: Option<NaiveDate>,
        /// Report communication strengths and challenges
        #[arg(long, requires = "birth")]
        impact: bool,
    },
    /// Licence plate vibration and owner compatibility
    Plate {
        plate: String,
        /// Owner birth date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        birth: Option<NaiveDate>,
    },
    /// Compare a name against a proposed change, or suggest variants
    NameChange {
        original: String,
        proposed: Option<String>,
        /// Comma-separated target Destiny numbers for suggestions
        #[arg(long, value_delimiter = ',')]
        suggest: Vec<u32>,
    },
    /// Business-name suitability from its Destiny number
    Business { name: String },
    /// Person-to-person compatibility
    Pair {
        first_name: String,
        #[arg(value_parser = parse_date_arg)]
        first_birth: NaiveDate,
        second_name: String,
        #[arg(value_parser = parse_date_arg)]
        second_birth: NaiveDate,
        /// general, romantic, friendship, professional or family
        #[arg(long, default_value = "general", value_parser = parse_kind)]
        kind: RelationshipKind,
    },
    /// Karmic debts and lessons
    Karmic {
        /// Full birth name
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        birth: NaiveDate,
    },
    /// Pinnacles and challenges
    Pinnacles {
        /// Birth date (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        birth: NaiveDate,
        /// Date used to pick the current period (default: today)
        #[arg(long, value_parser = parse_date_arg)]
        on: Option<NaiveDate>,
    },
    /// Full reading for one person
    Reading {
        /// Full birth name
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        birth: NaiveDate,
        /// Reading date (default: today)
        #[arg(long, value_parser = parse_date_arg)]
        on: Option<NaiveDate>,
        /// pythagorean or chaldean (default: from config)
        #[arg(long, value_parser = parse_system)]
        system: Option<LetterSystem>,
    },
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn parse_purpose(s: &str) -> Result<Purpose, String> {
    s.parse::<Purpose>().map_err(|_| {
        let names: Vec<&str> = ALL_PURPOSES.iter().map(|p| p.name()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn parse_kind(s: &str) -> Result<RelationshipKind, String> {
    ALL_RELATIONSHIP_KINDS
        .iter()
        .copied()
        .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| {
            let names: Vec<&str> = ALL_RELATIONSHIP_KINDS.iter().map(|k| k.name()).collect();
            format!("expected one of: {}", names.join(", "))
        })
}

fn parse_system(s: &str) -> Result<LetterSystem, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "pythagorean" => Ok(LetterSystem::Pythagorean),
        "chaldean" => Ok(LetterSystem::Chaldean),
        _ => Err("expected pythagorean or chaldean".to_string()),
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `NUMEN_LOG`, else the config's filter, else the default.
fn log_directive(config: Option<&NumenConfig>) -> String {
    std::env::var(LOG_ENV).unwrap_or_else(|_| {
        config
            .map_or(DEFAULT_LOG_FILTER, |c| c.log_filter())
            .to_string()
    })
}

fn subscriber<W>(directive: &str, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true)
        .compact()
        .finish()
}

/// Load the config while a provisional subscriber filtered by `directive`
/// is active, so the loader's own events reach `writer`.
fn load_config<W>(
    explicit: Option<&Path>,
    directive: &str,
    writer: W,
) -> Result<NumenConfig, ConfigError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing::subscriber::with_default(subscriber(directive, writer), || {
        NumenConfig::load(explicit)
    })
}

/// Print `value` as JSON, or through `text` otherwise.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn print_lucky(d: &LuckyDate) {
    let reasons: Vec<&str> = d.reasons.iter().map(|r| r.name()).collect();
    println!("{}  score {:>3}  {}", d.date, d.score, reasons.join(", "));
}

#[derive(Serialize)]
struct Reduced {
    number: u32,
    reduced: u32,
    master: bool,
}

#[derive(Serialize)]
struct Profile {
    name: String,
    birth: NaiveDate,
    #[serde(flatten)]
    numbers: IdentityProfile,
}

#[derive(Serialize)]
struct Cycles {
    #[serde(flatten)]
    snapshot: CycleSnapshot,
    personal_years: Vec<(i32, u32)>,
}

#[derive(Serialize)]
struct Periods {
    age: u32,
    pinnacles: [Pinnacle; 4],
    challenges: [Challenge; 4],
    current_pinnacle: Pinnacle,
    current_challenge: Challenge,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let provisional = log_directive(None);
    let config = load_config(cli.config.as_deref(), &provisional, std::io::stderr)?;
    subscriber(&log_directive(Some(&config)), std::io::stderr).init();
    tracing::debug!(path = ?cli.config, "configuration loaded");
    let json = cli.json;

    match cli.command {
        Commands::Reduce { number, no_masters } => {
            let reduced = reduce(number, !no_masters);
            let out = Reduced {
                number,
                reduced,
                master: !no_masters && is_master(reduced),
            };
            emit(json, &out, |r| {
                if r.master {
                    println!("{} -> {} (master)", r.number, r.reduced);
                } else {
                    println!("{} -> {}", r.number, r.reduced);
                }
            })
        }
        Commands::Profile { name, birth } => {
            let out = Profile {
                numbers: IdentityProfile::compute(&name, birth),
                name,
                birth,
            };
            emit(json, &out, |p| {
                println!("{} ({})", p.name, p.birth);
                println!("  Life Path:   {}", p.numbers.life_path);
                println!("  Destiny:     {}", p.numbers.destiny);
                println!("  Soul Urge:   {}", p.numbers.soul_urge);
                println!("  Personality: {}", p.numbers.personality);
                println!("  Maturity:    {}", p.numbers.maturity);
                println!("  Balance:     {}", p.numbers.balance);
            })
        }
        Commands::Cycles { birth, on, years } => {
            let on = on.unwrap_or_else(today);
            let out = Cycles {
                snapshot: CycleSnapshot::compute(birth, on),
                personal_years: personal_year_sequence(birth, on.year(), years),
            };
            emit(json, &out, |c| {
                let s = &c.snapshot;
                println!("Cycles on {}", s.date);
                println!(
                    "  Personal:  year {}  month {}  day {}",
                    s.personal_year, s.personal_month, s.personal_day
                );
                println!(
                    "  Universal: year {}  month {}  day {}",
                    s.universal_year, s.universal_month, s.universal_day
                );
                for (year, n) in &c.personal_years {
                    println!("  {year}: {n}");
                }
            })
        }
        Commands::Loshu { birth } => {
            let grid = lo_shu_grid(birth);
            emit(json, &grid, |g| {
                for row in &g.grid {
                    let cells: Vec<String> = row.iter().map(u32::to_string).collect();
                    println!("  {}", cells.join(" "));
                }
                println!("Missing: {:?}", g.missing);
                for p in &g.planes {
                    println!(
                        "  {:<10} {:<8} {}",
                        p.plane.name(),
                        p.strength.name(),
                        p.meaning
                    );
                }
                for a in &g.arrows {
                    println!("  arrow {}: {}", a.kind.name(), a.meaning);
                }
                println!("Dominant element: {}", g.dominant_element.name());
            })
        }
        Commands::Lucky {
            name,
            birth,
            from,
            to,
            next,
        } => {
            let from = from.unwrap_or_else(today);
            if next {
                let found = next_lucky_date(birth, &name, from, config.search_days());
                return emit(json, &found, |d| match d {
                    Some(d) => print_lucky(d),
                    None => println!("No lucky date within {} days", config.search_days()),
                });
            }
            let to = match to {
                Some(d) => d,
                None => from
                    .checked_add_days(Days::new(config.search_days()))
                    .context("search range overflows the calendar")?,
            };
            let result = search_lucky_dates(birth, &name, from, to, &config.lucky_config())?;
            emit(json, &result, |r| {
                println!(
                    "Life Path {}  Destiny {}  Personal Year {}",
                    r.personal_numbers.life_path,
                    r.personal_numbers.destiny,
                    r.personal_numbers.personal_year
                );
                r.dates.iter().for_each(print_lucky);
            })
        }
        Commands::Purpose {
            name,
            birth,
            purpose,
            year,
            month,
        } => {
            let result = lucky_dates_for_purpose(birth, &name, purpose, year, month)?;
            emit(json, &result, |r| {
                println!("{} dates for {year}-{month:02}", purpose.name());
                r.dates.iter().for_each(print_lucky);
            })
        }
        Commands::Address {
            addresses,
            office,
            compare,
            birth,
        } => {
            if let Some(birth) = birth {
                let ranked =
                    rank_addresses(life_path(birth), &addresses, &config.address_scorer());
                return emit(json, &ranked, |rs| {
                    for r in rs {
                        println!(
                            "{:>3}  {}  {}",
                            r.compatibility, r.address, r.recommendation
                        );
                    }
                });
            }
            if compare {
                let [first, second] = addresses.as_slice() else {
                    bail!("--compare takes exactly two addresses");
                };
                let cmp = compare_addresses(first, second, &config.address_scorer());
                return emit(json, &cmp, |c| {
                    println!(
                        "{} vs {}: {} ({})",
                        c.first.address_number,
                        c.second.address_number,
                        c.compatibility,
                        c.grade.name()
                    );
                    println!("{}", c.recommendation);
                });
            }
            if office {
                let out: Vec<_> = addresses.iter().map(|a| analyze_office_address(a)).collect();
                return emit(json, &out, |os| {
                    for o in os {
                        println!(
                            "address {}  business {}: {}",
                            o.address.address_number, o.business_vibration, o.business_meaning
                        );
                    }
                });
            }
            let out: Vec<_> = addresses.iter().map(|a| analyze_address(a)).collect();
            emit(json, &out, |xs| {
                for (text, a) in addresses.iter().zip(xs) {
                    println!("{text}: {} - {}", a.address_number, a.meaning);
                }
            })
        }
        Commands::Phone {
            phones,
            landline,
            birth,
            impact,
        } => {
            if let Some(birth) = birth {
                let lp = life_path(birth);
                let scorer = config.phone_scorer();
                if impact {
                    let out = phones
                        .iter()
                        .map(|p| communication_impact(p, lp, &scorer))
                        .collect::<Result<Vec<_>, _>>()?;
                    return emit(json, &out, |xs| {
                        for x in xs {
                            println!("{} ({}): {}", x.analysis.digits, x.compatibility, x.overall);
                        }
                    });
                }
                let ranked = rank_phones(lp, &phones, &scorer)?;
                return emit(json, &ranked, |rs| {
                    for r in rs {
                        println!("{:>3}  {}  {}", r.compatibility, r.phone, r.recommendation);
                    }
                });
            }
            if landline {
                let out = phones
                    .iter()
                    .map(|p| analyze_landline(p))
                    .collect::<Result<Vec<_>, _>>()?;
                return emit(json, &out, |xs| {
                    for x in xs {
                        println!(
                            "{}: {} - stability {}, business {}",
                            x.phone.digits,
                            x.phone.value,
                            x.stability.text(),
                            x.business_suitability.text()
                        );
                    }
                });
            }
            let out = phones
                .iter()
                .map(|p| analyze_phone(p))
                .collect::<Result<Vec<_>, _>>()?;
            emit(json, &out, |xs| {
                for x in xs {
                    println!("{}: {} - {}", x.digits, x.value, x.communication_style);
                }
            })
        }
        Commands::Plate { plate, birth } => match birth {
            Some(birth) => {
                let v = vehicle_compatibility(&plate, birth, &config.plate_scorer())?;
                emit(json, &v, |v| {
                    println!(
                        "{}: {} vs Life Path {} -> {} ({})",
                        v.analysis.plate,
                        v.analysis.vibration,
                        v.owner_life_path,
                        v.compatibility,
                        v.level.name()
                    );
                    println!("{}", v.recommendation);
                })
            }
            None => {
                let a = analyze_plate(&plate)?;
                emit(json, &a, |a| {
                    println!("{}: {} - {}", a.plate, a.vibration, a.energy);
                    println!("{}", a.characteristics.join(", "));
                })
            }
        },
        Commands::NameChange {
            original,
            proposed,
            suggest,
        } => {
            if let Some(proposed) = proposed {
                let cmp = compare_name_change(&original, &proposed, &config.address_scorer());
                return emit(json, &cmp, |c| {
                    println!(
                        "Destiny {} -> {}  Soul Urge {} -> {}  Personality {} -> {}",
                        c.before.destiny,
                        c.after.destiny,
                        c.before.soul_urge,
                        c.after.soul_urge,
                        c.before.personality,
                        c.after.personality
                    );
                    println!("{}", c.summary);
                });
            }
            if suggest.is_empty() {
                bail!("give a proposed name or --suggest targets");
            }
            let out = name_suggestions(&original, &suggest);
            emit(json, &out, |xs| {
                if xs.is_empty() {
                    println!("No single-letter variant reaches those numbers");
                }
                for s in xs {
                    println!("{} -> {}  ({})", s.name, s.destiny, s.reason);
                }
            })
        }
        Commands::Business { name } => {
            let out = analyze_business_name(&name);
            emit(json, &out, |b| {
                println!("{}: {} ({} energy)", b.name, b.destiny, b.energy.name());
                println!("  Suited to:  {}", b.suitable_for.join(", "));
                println!("  Challenges: {}", b.challenges.join(", "));
            })
        }
        Commands::Pair {
            first_name,
            first_birth,
            second_name,
            second_birth,
            kind,
        } => {
            let first = Person::new(first_name, first_birth);
            let second = Person::new(second_name, second_birth);
            let out = numen_rs::pair(&first, &second, kind);
            emit(json, &out, |p| {
                println!(
                    "{} compatibility: {} ({})",
                    p.kind.name(),
                    p.overall,
                    p.level.name()
                );
                println!(
                    "  Life Path {}/{}: {}",
                    p.life_path.first, p.life_path.second, p.life_path.score
                );
                println!(
                    "  Destiny   {}/{}: {}",
                    p.destiny.first, p.destiny.second, p.destiny.score
                );
                println!(
                    "  Soul Urge {}/{}: {}",
                    p.soul_urge.first, p.soul_urge.second, p.soul_urge.score
                );
            })
        }
        Commands::Karmic { name, birth } => {
            let path = karmic_path(birth, &name);
            emit(json, &path, |k| {
                for d in &k.debts {
                    let title = debt_meaning(d.number).map_or("", |m| m.title);
                    println!("Debt {} ({}): {}", d.number, d.source.name(), title);
                }
                println!("Lessons: {:?}", k.lessons);
                if k.path_number > 0 {
                    println!("Karmic path number: {}", k.path_number);
                }
                for step in &k.healing_steps {
                    println!("  - {step}");
                }
            })
        }
        Commands::Pinnacles { birth, on } => {
            let age = age_in_year(birth, on.unwrap_or_else(today));
            let out = Periods {
                age,
                pinnacles: pinnacles(birth),
                challenges: challenges(birth),
                current_pinnacle: pinnacle_at_age(birth, age),
                current_challenge: challenge_at_age(birth, age),
            };
            emit(json, &out, |p| {
                for (pin, ch) in p.pinnacles.iter().zip(&p.challenges) {
                    let marker = if pin.period == p.current_pinnacle.period {
                        "*"
                    } else {
                        " "
                    };
                    println!(
                        "{marker} {}  ages {:>2}-{:<3} pinnacle {:>2}  challenge {}",
                        pin.period, pin.start_age, pin.end_age, pin.number, ch.number
                    );
                }
            })
        }
        Commands::Reading {
            name,
            birth,
            on,
            system,
        } => {
            let person = Person::new(name, birth);
            let on = on.unwrap_or_else(today);
            let r = reading_with(&person, on, system.unwrap_or(config.letter_system));
            emit(json, &r, |r| {
                println!(
                    "{} ({}) on {}",
                    r.person.full_name, r.person.birth_date, r.on
                );
                println!(
                    "  Life Path {}  Destiny {}  Soul Urge {}  Personality {}",
                    r.profile.life_path,
                    r.profile.destiny,
                    r.profile.soul_urge,
                    r.profile.personality
                );
                println!(
                    "  {} name number {}  compound {}",
                    r.name_number.system.name(),
                    r.name_number.value,
                    r.compound_number
                );
                println!(
                    "  Personal year {}  month {}  day {}",
                    r.cycles.personal_year, r.cycles.personal_month, r.cycles.personal_day
                );
                println!(
                    "  Age {}: pinnacle {}  challenge {}",
                    r.age, r.current_pinnacle.number, r.current_challenge.number
                );
                println!("  Karmic lessons {:?}", r.karmic.lessons);
            })
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
