/// Endpoint que devuelve el usuario actual
/// Configurado en tiempo de compilación (AUTH_ME_URL), por defecto relativo al origen
pub const CURRENT_USER_ENDPOINT: &str = match option_env!("AUTH_ME_URL") {
    Some(url) => url,
    None => "/api/auth/me",
};

/// Página de login a la que redirigimos ante cualquier fallo
pub const LOGIN_PATH: &str = match option_env!("LOGIN_PATH") {
    Some(path) => path,
    None => "/login.html",
};

/// Clave de localStorage donde vive el bearer token
pub const TOKEN_STORAGE_KEY: &str = match option_env!("TOKEN_STORAGE_KEY") {
    Some(key) => key,
    None => "token",
};

/// Clase CSS que oculta el dropdown
pub const HIDDEN_CLASS: &str = "hidden";

pub const ARIA_EXPANDED: &str = "aria-expanded";

/// Fallbacks de render
pub const FALLBACK_BADGE: &str = "U";
pub const FALLBACK_NAME: &str = "User";
