use crate::app::state::{App, Campo, InputMode, Tab};
use crate::log_key_event;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    log_key_event!(app.log_config, "key={:?}, tab={:?}", key.code, app.current_tab);

    // Priority 1: Help modal (highest priority)
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.toggle_help();
        }
        return Ok(());
    }

    // Priority 2: Detail modal
    if app.detalle.is_some() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q')
        ) {
            app.close_detalle();
        }
        return Ok(());
    }

    // Priority 3: Typing mode routes everything into the focused editor
    if app.input_mode == InputMode::Typing {
        return handle_typing_keys(app, key);
    }

    // Global keys
    match key.code {
        KeyCode::Char('?') => {
            app.toggle_help();
            return Ok(());
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.running = false;
            return Ok(());
        }
        KeyCode::Tab => {
            app.next_tab();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.previous_tab();
            return Ok(());
        }
        _ => {}
    }

    match app.current_tab {
        Tab::Formulario => handle_formulario_keys(app, key),
        Tab::Listado => handle_listado_keys(app, key),
    }
}

/// Keys while a form editor has focus. Esc always returns to
/// navigation; Enter leaves single-line fields but inserts a newline
/// in the multiline ones.
fn handle_typing_keys(app: &mut App, key: KeyEvent) -> Result<()> {
    let campo = app.formulario.campo;

    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Navigation;
            return Ok(());
        }
        KeyCode::Enter if !campo.es_multilinea() => {
            app.input_mode = InputMode::Navigation;
            app.formulario.campo = campo.next();
            return Ok(());
        }
        _ => {}
    }

    if let Some(editor) = app.formulario.editor_mut(campo) {
        editor.input(key);
    }

    Ok(())
}

fn handle_formulario_keys(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            app.formulario.campo = app.formulario.campo.next();
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            app.formulario.campo = app.formulario.campo.previous();
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L')
            if app.formulario.campo.es_seleccion() =>
        {
            let campo = app.formulario.campo;
            app.formulario.ciclar_seleccion(campo, true);
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H')
            if app.formulario.campo.es_seleccion() =>
        {
            let campo = app.formulario.campo;
            app.formulario.ciclar_seleccion(campo, false);
        }
        KeyCode::Enter if app.formulario.campo == Campo::Enviar => {
            // Schedule the submit so the busy label renders before the
            // request goes out. Re-entry is refused while one is active.
            if !app.formulario.enviando {
                app.formulario.enviando = true;
                app.formulario.pending_submit = true;
            }
        }
        KeyCode::Enter if app.formulario.editor(app.formulario.campo).is_some() => {
            app.input_mode = InputMode::Typing;
        }
        _ => {}
    }
    Ok(())
}

fn handle_listado_keys(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            app.listado.siguiente();
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            app.listado.anterior();
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.listado.filtro.ciclar_area();
            app.listado.pending_load = true;
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.listado.filtro.ciclar_estado();
            app.listado.pending_load = true;
        }
        KeyCode::Char('x') | KeyCode::Char('X') if app.listado.filtro.activo() => {
            app.listado.filtro.limpiar();
            app.listado.pending_load = true;
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.listado.pending_load = true;
        }
        // Enter opens the detail modal; fetching is async and handled
        // in the main event loop.
        _ => {}
    }
    Ok(())
}
