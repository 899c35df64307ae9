use serde::Deserialize;

// GET /defaultSymbols -> {"code":200,"data":["BTCUSDT",...],"msg":null}
#[derive(Debug, Deserialize)]
pub struct MexcDefaultSymbolsResponse {
    #[serde(default)]
    pub data: Vec<String>,
}
