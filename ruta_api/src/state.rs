use ruta_directions::openrouteservice::OpenRouteServiceClient;

pub struct AppState {
    pub directions: OpenRouteServiceClient,
}
