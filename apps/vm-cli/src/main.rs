use clap::{Args, Parser, Subcommand};
use vm_app::{AppResult, Evaluation, FormState, InputLimits, evaluate_form, to_json};
use vm_engine::FluidKind;

const CHART_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "vm-cli")]
#[command(about = "Volumetrics CLI - OOIP/OGIP and recoverable reserves", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Original oil in place
    Oil {
        #[command(flatten)]
        reservoir: ReservoirArgs,
        /// Oil formation volume factor Bo (rb/stb)
        #[arg(long, default_value_t = InputLimits::BO.min)]
        bo: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Original gas in place
    Gas {
        #[command(flatten)]
        reservoir: ReservoirArgs,
        /// Gas formation volume factor Bg (rcf/scf)
        #[arg(long, default_value_t = InputLimits::BG.min)]
        bg: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the accepted range of every input
    Limits,
}

#[derive(Args)]
struct ReservoirArgs {
    /// Reservoir area (acres)
    #[arg(long, default_value_t = InputLimits::AREA_ACRES.min)]
    area: f64,
    /// Net pay thickness (ft)
    #[arg(long, default_value_t = InputLimits::NET_PAY_FT.min)]
    net_pay: f64,
    /// Porosity (fraction)
    #[arg(long, default_value_t = InputLimits::POROSITY.min)]
    porosity: f64,
    /// Water saturation (fraction)
    #[arg(long, default_value_t = InputLimits::WATER_SATURATION.min)]
    sw: f64,
    /// Recovery factor (fraction); estimates recoverable reserves when given
    #[arg(long)]
    recovery_factor: Option<f64>,
}

#[derive(Args)]
struct OutputArgs {
    /// Print the full evaluation as JSON
    #[arg(long)]
    json: bool,
    /// Also draw the charts as text
    #[arg(long, conflicts_with = "json")]
    charts: bool,
}

fn main() -> AppResult<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Oil {
            reservoir,
            bo,
            output,
        } => {
            let form = FormState {
                bo,
                ..build_form(FluidKind::Oil, &reservoir)
            };
            cmd_evaluate(&form, &output)
        }
        Commands::Gas {
            reservoir,
            bg,
            output,
        } => {
            let form = FormState {
                bg,
                ..build_form(FluidKind::Gas, &reservoir)
            };
            cmd_evaluate(&form, &output)
        }
        Commands::Limits => {
            cmd_limits();
            Ok(())
        }
    }
}

fn build_form(fluid: FluidKind, args: &ReservoirArgs) -> FormState {
    let mut form = FormState {
        area_acres: args.area,
        net_pay_ft: args.net_pay,
        porosity: args.porosity,
        water_saturation: args.sw,
        estimate_recovery: args.recovery_factor.is_some(),
        ..Default::default()
    };
    form.set_fluid(fluid);
    if let Some(rf) = args.recovery_factor {
        form.recovery_factor = rf;
    }
    form
}

fn cmd_evaluate(form: &FormState, output: &OutputArgs) -> AppResult<()> {
    tracing::info!(fluid = %form.fluid, recovery = form.estimate_recovery, "evaluating");
    let evaluation = evaluate_form(form)?;

    if output.json {
        println!("{}", to_json(&evaluation)?);
        return Ok(());
    }

    print_report(&evaluation);
    if output.charts {
        for chart in &evaluation.charts {
            println!();
            print!("{}", chart.render_text(CHART_WIDTH));
        }
    }
    Ok(())
}

fn print_report(evaluation: &Evaluation) {
    print!("{}", evaluation.report);
}

fn cmd_limits() {
    let rows = [
        ("area (acres)", InputLimits::AREA_ACRES),
        ("net pay (ft)", InputLimits::NET_PAY_FT),
        ("porosity", InputLimits::POROSITY),
        ("water saturation", InputLimits::WATER_SATURATION),
        ("Bo (rb/stb)", InputLimits::BO),
        ("Bg (rcf/scf)", InputLimits::BG),
        ("recovery factor, oil", InputLimits::RECOVERY_OIL),
        ("recovery factor, gas", InputLimits::RECOVERY_GAS),
    ];
    println!("Input limits (values outside are clamped):");
    for (name, range) in rows {
        println!(
            "  {:<22} {} .. {} (step {})",
            name, range.min, range.max, range.step
        );
    }
}
