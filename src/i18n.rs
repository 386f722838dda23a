use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Pt,
    Es,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Pt => "pt",
            Lang::Es => "es",
        }
    }

    pub fn text(self, message: Message) -> &'static str {
        match (self, message) {
            (Lang::Pt, Message::PageTitle) => "Retirada de Estoque",
            (Lang::Es, Message::PageTitle) => "Retiro de Stock",
            (Lang::Pt, Message::ScanBarcode) => "Escaneie o Código de Barras",
            (Lang::Es, Message::ScanBarcode) => "Escanee el Código de Barras",
            (Lang::Pt, Message::ChooseExpiry) => "Selecione a validade",
            (Lang::Es, Message::ChooseExpiry) => "Seleccione la validez",
            (Lang::Pt, Message::NoStock) => "Nenhum produto encontrado ou sem estoque.",
            (Lang::Es, Message::NoStock) => "No se encontraron productos o sin stock.",
            (_, Message::Units) => "unidades",
            (_, Message::Batch) => "Lote",
            (Lang::Pt, Message::Back) => "Voltar",
            (Lang::Es, Message::Back) => "Volver",
            (Lang::Pt, Message::LookupFailed) => "Erro ao buscar produtos.",
            (Lang::Es, Message::LookupFailed) => "Error al buscar productos.",
            (Lang::Pt, Message::EmptySubmit) => {
                "Por favor, escaneie ou digite o código de barras."
            }
            (Lang::Es, Message::EmptySubmit) => {
                "Por favor, escanee o digite el código de barras."
            }
        }
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pt" | "pt-br" => Ok(Lang::Pt),
            "es" => Ok(Lang::Es),
            other => Err(format!("unsupported language '{other}'")),
        }
    }
}

/// User-facing strings of the withdrawal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PageTitle,
    ScanBarcode,
    ChooseExpiry,
    NoStock,
    Units,
    Batch,
    Back,
    LookupFailed,
    EmptySubmit,
}
