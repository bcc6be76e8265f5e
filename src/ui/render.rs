//! Plain-text projection of screen state, one line per entry.

use std::fmt::Write as _;

use crate::models::{
    Antecedente, CandidatoDetail, CandidatoItem, CargoNombre, Estadisticas, Partido, Region,
    User, Voto,
};
use crate::ui::candidato::CandidatoDetailState;
use crate::ui::comparar::{CompararState, Resumen};
use crate::ui::home::HomeState;
use crate::ui::login::LoginState;
use crate::ui::perfil::PerfilState;
use crate::ui::register::RegisterState;
use crate::ui::resultados::ResultadosState;
use crate::ui::votar::VotarState;

pub const LOADING: &str = "Cargando...";
pub const SIN_RESULTADOS: &str = "Aún no hay resultados registrados";
pub const SIN_CANDIDATOS: &str = "No hay candidatos disponibles";
pub const SIN_VOTOS: &str = "Aún no has votado";

/// Something that can be shown as text.
pub trait Render {
    fn render(&self) -> Vec<String>;

    fn to_text(&self) -> String {
        self.render().join("\n")
    }
}

fn error_line(message: &str) -> String {
    format!("Error: {message}")
}

/// Loading and error lines shared by every screen. `None` means the caller
/// should render its content.
fn status_lines(is_loading: bool, error: Option<&str>) -> Option<Vec<String>> {
    if is_loading {
        return Some(vec![LOADING.to_string()]);
    }
    error.map(|message| vec![error_line(message)])
}

pub fn candidato_line(candidato: &CandidatoItem) -> String {
    let mut line = format!(
        "[{}] {} ({}) - {} - {}",
        candidato.id,
        candidato.nombre_completo,
        candidato.partido.sigla,
        candidato.cargo.nombre_cargo,
        candidato.region.display(),
    );
    if let Some(votos) = candidato.total_votos {
        let _ = write!(line, " - {votos} votos");
    }
    line
}

fn antecedentes(title: &str, items: &[Antecedente], out: &mut Vec<String>) {
    out.push(format!("{title} ({})", items.len()));
    for item in items {
        out.push(format!("  - {} [{}] {}", item.fecha, item.tipo.as_str(), item.titulo));
        if !item.descripcion.is_empty() {
            out.push(format!("    {}", item.descripcion));
        }
        if let Some(fuente) = &item.fuente_url {
            out.push(format!("    Fuente: {fuente}"));
        }
    }
}

impl Render for CandidatoDetail {
    fn render(&self) -> Vec<String> {
        let mut lines = vec![
            self.nombre_completo.clone(),
            format!(
                "Partido: {} ({})",
                self.partido.nombre_partido, self.partido.sigla
            ),
            format!("Cargo: {}", self.cargo.nombre_cargo),
            format!("Región: {}", self.region.display()),
            format!("Votos: {}", self.total_votos.unwrap_or(0)),
        ];
        antecedentes("Denuncias", &self.denuncias, &mut lines);
        antecedentes("Proyectos", &self.proyectos, &mut lines);
        antecedentes("Propuestas", &self.propuestas, &mut lines);
        lines
    }
}

impl Render for User {
    fn render(&self) -> Vec<String> {
        vec![
            self.nombre_completo.clone(),
            format!("DNI: {}", self.dni),
            format!("Región: {}", self.region.nombre_region),
            format!("Rol: {}", self.rol.as_str()),
        ]
    }
}

impl Render for Voto {
    fn render(&self) -> Vec<String> {
        let mut line = format!(
            "{}: {} ({})",
            self.cargo.nombre(),
            self.candidato.nombre_completo,
            self.candidato.partido.sigla
        );
        if let Some(fecha) = &self.created_at {
            let _ = write!(line, " - {fecha}");
        }
        vec![line]
    }
}

impl Render for [Region] {
    fn render(&self) -> Vec<String> {
        self.iter()
            .map(|region| format!("[{}] {}", region.id, region.nombre_region))
            .collect()
    }
}

impl Render for [Partido] {
    fn render(&self) -> Vec<String> {
        self.iter()
            .map(|partido| {
                format!(
                    "[{}] {} - {}",
                    partido.id, partido.sigla, partido.nombre_partido
                )
            })
            .collect()
    }
}

impl Render for Estadisticas {
    fn render(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Total de votos: {}", self.total_votos),
            format!("Total de votantes: {}", self.total_votantes),
            format!("Total de candidatos: {}", self.total_candidatos),
        ];
        for (cargo, votos) in &self.votos_por_cargo {
            lines.push(format!("  {cargo}: {votos}"));
        }
        lines
    }
}

impl Render for LoginState {
    fn render(&self) -> Vec<String> {
        if let Some(lines) = status_lines(self.is_loading, self.error_message.as_deref()) {
            return lines;
        }
        self.success_message.iter().cloned().collect()
    }
}

impl Render for RegisterState {
    fn render(&self) -> Vec<String> {
        if let Some(lines) = status_lines(self.is_loading, self.error_message.as_deref()) {
            return lines;
        }
        let mut lines = Vec::new();
        if let Some(validation) = &self.dni_validation {
            lines.push(format!(
                "{} {} {} (DNI {})",
                validation.nombre,
                validation.apellido_paterno,
                validation.apellido_materno,
                validation.dni
            ));
        }
        lines.extend(self.success_message.iter().cloned());
        lines
    }
}

impl Render for HomeState {
    fn render(&self) -> Vec<String> {
        if let Some(lines) = status_lines(self.is_loading, self.error_message.as_deref()) {
            return lines;
        }
        if self.candidatos.is_empty() {
            return vec![SIN_CANDIDATOS.to_string()];
        }
        self.candidatos.iter().map(candidato_line).collect()
    }
}

impl Render for CandidatoDetailState {
    fn render(&self) -> Vec<String> {
        if let Some(lines) = status_lines(self.is_loading, self.error_message.as_deref()) {
            return lines;
        }
        self.candidato
            .as_ref()
            .map(Render::render)
            .unwrap_or_default()
    }
}

fn resumen_line(label: &str, primero: usize, segundo: usize) -> String {
    format!("{label:<12}{primero:>8}{segundo:>8}")
}

impl Render for CompararState {
    fn render(&self) -> Vec<String> {
        if let Some(lines) = status_lines(self.is_loading, self.error_message.as_deref()) {
            return lines;
        }
        let (Some(primero), Some(segundo)) = (&self.primero, &self.segundo) else {
            return vec!["Selecciona dos candidatos para comparar".to_string()];
        };
        let a = Resumen::from(primero);
        let b = Resumen::from(segundo);

        vec![
            format!("{} vs {}", primero.nombre_completo, segundo.nombre_completo),
            format!(
                "{:<12}{:>8}{:>8}",
                "Partido", primero.partido.sigla, segundo.partido.sigla
            ),
            resumen_line("Denuncias", a.denuncias, b.denuncias),
            resumen_line("Proyectos", a.proyectos, b.proyectos),
            resumen_line("Propuestas", a.propuestas, b.propuestas),
            format!("{:<12}{:>8}{:>8}", "Votos", a.total_votos, b.total_votos),
        ]
    }
}

impl Render for VotarState {
    fn render(&self) -> Vec<String> {
        if self.is_loading {
            return vec![LOADING.to_string()];
        }
        let mut lines = Vec::new();
        if let Some(message) = &self.error_message {
            lines.push(error_line(message));
        }
        if let Some(message) = &self.success_message {
            lines.push(message.clone());
        }
        if self.mostrar_confirmacion {
            if let Some(candidato) = &self.candidato_seleccionado {
                lines.push(format!("¿Confirmar voto por {}?", candidato_line(candidato)));
            }
        }

        let cargos: Vec<CargoNombre> = match self.cargo_seleccionado {
            Some(cargo) => vec![cargo],
            None => CargoNombre::all().to_vec(),
        };
        for cargo in cargos {
            let estado = self.estado_de(cargo);
            let marca = if estado.ya_voto {
                " (ya votaste)"
            } else if !estado.puede_votar {
                " (no disponible)"
            } else {
                ""
            };
            lines.push(format!("{cargo}{marca}"));
            for candidato in self.candidatos_visibles(cargo) {
                lines.push(format!("  {}", candidato_line(candidato)));
            }
        }
        lines
    }
}

impl Render for ResultadosState {
    fn render(&self) -> Vec<String> {
        if let Some(lines) = status_lines(self.is_loading, self.error_message.as_deref()) {
            return lines;
        }
        if self.is_empty() {
            return vec![SIN_RESULTADOS.to_string()];
        }
        if self.mostrar_por_partido {
            return self
                .resultados_por_partido
                .iter()
                .map(|partido| {
                    format!(
                        "{} - {}: {} votos",
                        partido.sigla, partido.nombre_partido, partido.total_votos
                    )
                })
                .collect();
        }
        self.resultados
            .iter()
            .enumerate()
            .map(|(position, resultado)| {
                let mut line = format!(
                    "{}. {} ({}) - {}",
                    position + 1,
                    resultado.nombre_completo,
                    resultado.partido.sigla,
                    resultado.cargo
                );
                if let Some(region) = &resultado.region {
                    let _ = write!(line, " - {region}");
                }
                let _ = write!(line, ": {} votos", resultado.total_votos);
                line
            })
            .collect()
    }
}

impl Render for PerfilState {
    fn render(&self) -> Vec<String> {
        if let Some(lines) = status_lines(self.is_loading, self.error_message.as_deref()) {
            return lines;
        }
        let mut lines = self
            .perfil
            .as_ref()
            .map(Render::render)
            .unwrap_or_default();
        if self.is_loading_votos {
            lines.push(LOADING.to_string());
        } else if self.mis_votos.is_empty() {
            lines.push(SIN_VOTOS.to_string());
        } else {
            lines.push("Mis votos:".to_string());
            lines.extend(self.mis_votos.iter().flat_map(|voto| voto.render()));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_render_empty_state_not_error() {
        let state = ResultadosState::default();
        assert_eq!(state.render(), vec![SIN_RESULTADOS.to_string()]);
    }

    #[test]
    fn loading_wins_over_content() {
        let state = HomeState {
            is_loading: true,
            error_message: Some("boom".into()),
            ..HomeState::default()
        };
        assert_eq!(state.render(), vec![LOADING.to_string()]);
    }

    #[test]
    fn errors_are_rendered_inline() {
        let state = ResultadosState {
            error_message: Some("Error al cargar resultados".into()),
            ..ResultadosState::default()
        };
        assert_eq!(state.to_text(), "Error: Error al cargar resultados");
    }
}
