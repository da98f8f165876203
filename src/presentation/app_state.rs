// Application state for HTTP handlers
use crate::application::diurnal_service::DiurnalChartService;
use crate::infrastructure::config::ChartSettings;

#[derive(Clone)]
pub struct AppState {
    pub chart_service: DiurnalChartService,
    pub chart_settings: ChartSettings,
}
