//! Pages
//!
//! One component per route.

mod chamados;
mod dashboard;
mod login;
mod not_found;
mod novo_chamado;
mod registro;
mod ticket_detalhes;
mod ticket_edicao;
mod usuarios;

pub use chamados::ChamadosPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use novo_chamado::NovoChamadoPage;
pub use registro::RegistroPage;
pub use ticket_detalhes::TicketDetalhesPage;
pub use ticket_edicao::TicketEdicaoPage;
pub use usuarios::UsuariosPage;
