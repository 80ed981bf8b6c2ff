//! 마켓플레이스 리소스 DTO
//!
//! 백엔드 REST API의 리소스별 요청/응답 구조체입니다.
//! 필드 이름은 백엔드와 동일하게 camelCase로 직렬화됩니다.

pub mod banner;
pub mod setting;
pub mod upload;
pub mod voucher;
pub mod review;
pub mod region;

pub use banner::*;
pub use setting::*;
pub use upload::*;
pub use voucher::*;
pub use review::*;
pub use region::*;
