//! OpenAPI documentation definition.

use numconv_core::{ConversionResult, NumberType};
use utoipa::OpenApi;

use crate::handlers::ConvertRequest;

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::handle_health, crate::handlers::handle_convert),
    components(schemas(ConvertRequest, ConversionResult, NumberType)),
    info(
        title = "numconv API",
        version = "1.0",
        description = "Convert numbers between words, decimal, binary, octal, hexadecimal and base64"
    )
)]
pub(crate) struct ApiDoc;
