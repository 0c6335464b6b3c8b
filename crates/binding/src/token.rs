//! ERC20 token contract bindings.

use alloy_sol_types::sol;

sol! {
    /// The ERC20 balance query.
    interface IERC20 {
        /// Get token balance of an account
        function balanceOf(address account) external view returns (uint256);
    }
}
