use crate::app::render::{render_records, render_search_hit, render_sort_report, DisplayFormat};
use crate::core::{Catalog, SortCriterion};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{parse_leading_int, parse_record, strip_line_ending};
use std::io::{BufRead, Write};

/// Menu choices of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    List,
    Sort,
    Search,
    SeedExample,
    Exit,
}

impl MenuChoice {
    /// Reads the choice with `atoi` rules, so `"1abc"` is 1 and text with no
    /// leading number is 0 (exit).
    pub fn parse(input: &str) -> Option<Self> {
        match parse_leading_int(input) {
            1 => Some(MenuChoice::Register),
            2 => Some(MenuChoice::List),
            3 => Some(MenuChoice::Sort),
            4 => Some(MenuChoice::Search),
            5 => Some(MenuChoice::SeedExample),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What the loop does once an action finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Pause,
    SkipPause,
    Stop,
}

/// Line-driven menu over one [`Catalog`].
pub struct MenuSession<R: BufRead, W: Write> {
    catalog: Catalog,
    input: R,
    output: W,
    format: DisplayFormat,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
            format: DisplayFormat::Table,
        }
    }

    pub fn with_format(mut self, format: DisplayFormat) -> Self {
        self.format = format;
        self
    }

    /// Runs until `0` or end of input and hands back the catalog.
    pub fn run(mut self) -> Result<Catalog> {
        tracing::info!("Menu session started");
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let choice = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => choice,
                None => {
                    writeln!(self.output, "Opção inválida.")?;
                    if !self.pause()? {
                        break;
                    }
                    continue;
                }
            };

            let flow = match choice {
                MenuChoice::Register => self.register()?,
                MenuChoice::List => {
                    render_records(self.catalog.snapshot(), self.format, &mut self.output)?;
                    Flow::Pause
                }
                MenuChoice::Sort => self.sort()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::SeedExample => {
                    let added = self.catalog.seed_fixed_example();
                    writeln!(self.output, "{} componentes de exemplo inseridos.", added)?;
                    Flow::Pause
                }
                MenuChoice::Exit => Flow::Stop,
            };

            match flow {
                Flow::Pause if self.pause()? => {}
                Flow::SkipPause => {}
                Flow::Pause | Flow::Stop => break,
            }
        }
        self.output.flush()?;
        tracing::info!("Menu session ended with {} components", self.catalog.len());
        Ok(self.catalog)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n========= MENU =========")?;
        writeln!(self.output, "1 - Cadastrar componente")?;
        writeln!(self.output, "2 - Mostrar lista")?;
        writeln!(self.output, "3 - Ordenar lista")?;
        writeln!(self.output, "4 - Buscar por nome")?;
        writeln!(self.output, "5 - Inserir exemplo")?;
        writeln!(self.output, "0 - Sair")?;
        write!(self.output, "Escolha: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&line).to_string()))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn pause(&mut self) -> Result<bool> {
        Ok(self.prompt("\nPressione ENTER para continuar...")?.is_some())
    }

    fn register(&mut self) -> Result<Flow> {
        if self.catalog.len() >= self.catalog.capacity() {
            let err = CatalogError::CapacityExceeded {
                capacity: self.catalog.capacity(),
            };
            writeln!(self.output, "{}", err.user_friendly_message())?;
            return Ok(Flow::Pause);
        }

        let Some(name) = self.prompt("Nome: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(kind) = self.prompt("Tipo: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(priority) = self.prompt("Prioridade (1-10): ")? else {
            return Ok(Flow::Stop);
        };

        let inserted = parse_record(&name, &kind, &priority)
            .and_then(|record| self.catalog.insert_record(record));
        match inserted {
            Ok(()) => writeln!(self.output, "Componente cadastrado.")?,
            Err(e) if e.is_recoverable() => writeln!(self.output, "{}", e.user_friendly_message())?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Pause)
    }

    fn sort(&mut self) -> Result<Flow> {
        let Some(answer) =
            self.prompt("Ordenar por:\n1 - Nome\n2 - Tipo\n3 - Prioridade\nEscolha: ")?
        else {
            return Ok(Flow::Stop);
        };

        match answer.parse::<SortCriterion>() {
            Ok(criterion) => {
                let report = self.catalog.sort(criterion);
                render_sort_report(&report, &mut self.output)?;
            }
            Err(_) => writeln!(self.output, "Critério inválido.")?,
        }
        Ok(Flow::Pause)
    }

    fn search(&mut self) -> Result<Flow> {
        if !self.catalog.collection().sorted_by_name() {
            writeln!(
                self.output,
                "{}",
                CatalogError::PreconditionViolation.user_friendly_message()
            )?;
            return Ok(Flow::SkipPause);
        }

        let Some(key) = self.prompt("Nome para buscar: ")? else {
            return Ok(Flow::Stop);
        };

        match self.catalog.search(&key) {
            Ok(hit) => render_search_hit(&hit, &mut self.output)?,
            Err(e) if e.is_recoverable() => writeln!(self.output, "{}", e.user_friendly_message())?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Pause)
    }
}
