// --- Generador de Horarios - Archivo principal ---

use horarios::catalogo::cargar_catalogo_archivo;
use horarios::config::load_dotenv;
use horarios::{run_server, Config, Planificador};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    log::info!("=== Generador de Horarios (API) ===");

    let mut planificador = Planificador::new(config.dia_desconocido, config.horas.clone());
    if let Some(path) = config.catalogo.as_ref() {
        match cargar_catalogo_archivo(path) {
            Ok(catalogo) => planificador.cargar_catalogo(catalogo),
            Err(e) => log::warn!("no se pudo precargar el catálogo '{}': {}", path.display(), e),
        }
    }

    run_server(config, planificador).await
}
