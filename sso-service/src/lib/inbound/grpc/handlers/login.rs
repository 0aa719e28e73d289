use tonic::Status;

use crate::domain::auth::models::AppId;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login(
    service: &dyn AuthServicePort,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let token = service
        .login(&request.email, &request.password, AppId(request.app_id))
        .await?;

    Ok(LoginResponse { token })
}
