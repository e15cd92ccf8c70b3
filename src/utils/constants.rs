/// Clave de localStorage con la sesión serializada ({username, email, token})
pub const STORAGE_KEY_USER: &str = "user";

/// Clave de localStorage con el bearer token (separada de la sesión)
pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";

/// Productos por página en el dashboard (paginación 100% cliente)
pub const PRODUCTS_PER_PAGE: usize = 3;

/// Evento de window emitido tras el logout
pub const LOGGED_OUT_EVENT: &str = "loggedOut";

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";
