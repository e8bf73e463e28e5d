// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Property records used across integration tests.

use imoveis_server::{Property, PropertyInput};
use serde_json::{json, Value};

#[allow(clippy::too_many_arguments)]
fn property(
    id: i64,
    logradouro: &str,
    tipo_logradouro: &str,
    bairro: &str,
    cidade: &str,
    cep: &str,
    tipo: &str,
    valor: f64,
    data_aquisicao: &str,
) -> Property {
    Property {
        id,
        logradouro: logradouro.to_string(),
        tipo_logradouro: tipo_logradouro.to_string(),
        bairro: bairro.to_string(),
        cidade: cidade.to_string(),
        cep: cep.to_string(),
        tipo: tipo.to_string(),
        valor,
        data_aquisicao: data_aquisicao.to_string(),
    }
}

/// Four records with ids 0 to 3; two of them in São Paulo.
pub fn four_properties() -> Vec<Property> {
    vec![
        property(
            0,
            "Rua Inhambu, 97 ",
            "Rua",
            "Moema",
            "São Paulo",
            "04520-010",
            "Apartamento",
            7000000.0,
            "2022-06-02",
        ),
        property(
            1,
            "Rua Nascimento Silva, 107",
            "Rua",
            "Ipanema",
            "Rio de Janeiro",
            "22421-025",
            "Casa",
            5000000.0,
            "1974-01-25",
        ),
        property(
            2,
            "Praça dos Três Poderes",
            "Praça",
            "Centro",
            "Brasília",
            "70175-900",
            "Palácio",
            200000000.0,
            "1960-04-21",
        ),
        property(
            3,
            "Avenida Braz Leme, 1981",
            "Avenida",
            "Santana",
            "São Paulo",
            "02022-010",
            "Apartamento",
            1800000.0,
            "2014-10-27",
        ),
    ]
}

/// A complete create/update body.
pub fn new_property_body() -> Value {
    json!({
        "logradouro": "Rua Dr Getúlio Vargas, 308",
        "tipo_logradouro": "Rua",
        "bairro": "Centro",
        "cidade": "Ituverava",
        "cep": "14500-000",
        "tipo": "Casa",
        "valor": 1000000.0,
        "data_aquisicao": "1968-02-15"
    })
}

pub fn new_property_input() -> PropertyInput {
    serde_json::from_value(new_property_body()).unwrap()
}

/// The `_links` object a decorated record is expected to carry.
pub fn expected_links(id: i64, tipo: &str, cidade: &str) -> Value {
    json!({
        "self": format!("/imoveis/{id}"),
        "update": format!("/imoveis/{id}"),
        "delete": format!("/imoveis/{id}"),
        "all": "/imoveis",
        "by_type": format!("/imoveis/tipo/{tipo}"),
        "by_city": format!("/imoveis/cidade/{cidade}"),
    })
}
