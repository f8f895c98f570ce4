use BFBGasifier::GasPhase::gas_phase_rhs::GasPhaseRHS;
use BFBGasifier::GasPhase::gas_phase_state::ReactionSources;
use BFBGasifier::Setup::bfb_params::{BFBConfig, BFBParams};
use BFBGasifier::Setup::grid::Grid;
use BFBGasifier::Setup::initial_conditions::InitialConditions;
use BFBGasifier::Utils::load_from_file::BFBTask;
use BFBGasifier::Utils::results::GasPhaseResults;
use log::{LevelFilter, info};
use prettytable::{Table, row};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Evaluates the gas-phase right-hand side once at the start-up state.
///
/// usage: BFBGasifier [task_file]
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let task = match std::env::args().nth(1) {
        Some(file_name) => BFBTask::from_file(&file_name)?,
        None => {
            info!("no task file given, using the reference configuration");
            BFBTask {
                params: BFBParams::new(BFBConfig::default())?,
                initial: InitialConditions::default(),
            }
        }
    };
    let params = &task.params;
    params.pretty_print();

    let grid = Grid::uniform(params.N, params.L)?;
    let model = GasPhaseRHS::new(params, &grid)?;
    let state = task.initial.gas_state(params);
    let solids = task.initial.solid_fields(params);
    let sources = ReactionSources::zeros(params.N);

    let closures = model.closures(&state, &solids, &sources)?;
    let fluid = &closures.fluid;
    info!(
        "umf = {:.4e} m/s, De = {:.4}, ef = {:.4}, Lp = {:.4} m",
        fluid.umf, fluid.De, fluid.ef, fluid.Lp
    );

    let d = model.evaluate(&state, &solids, &sources)?;
    let mut table = Table::new();
    table.add_row(row!["Derivative", "Cell 0", "Bed top (Np-1)", "Outlet"]);
    let (bed_top, top) = (params.Np - 1, params.N - 1);
    let rows = [
        ("dTg/dt", &d.dTg_dt),
        ("dmfg/dt", &d.dmfg_dt),
        ("drhob_g/dt", &d.drhob_g_dt),
        ("drhob_h2o/dt", &d.drhob_h2o_dt),
    ];
    for (name, rate) in rows {
        table.add_row(row![
            name,
            format!("{:.4e}", rate[0]),
            format!("{:.4e}", rate[bed_top]),
            format!("{:.4e}", rate[top])
        ]);
    }
    table.printstd();

    let results = GasPhaseResults::from_samples(&model, &[0.0], &[state.to_vector()])?;
    results.pretty_print();
    Ok(())
}
