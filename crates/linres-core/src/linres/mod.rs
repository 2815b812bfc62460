/// Linear reservoir — single-store rainfall-runoff transformation.
///
/// One parameter (`k`, the recession constant) and one store whose outflow
/// is proportional to its content, discretised analytically per timestep.
pub mod constants;
pub mod fluxes;
pub mod params;
pub mod processes;
pub mod run;
pub mod state;
