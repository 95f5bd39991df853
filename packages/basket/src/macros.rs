#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!(
                    $env,
                    "Error {} thrown at {}:{}",
                    error_code as u32,
                    soroban_sdk::String::from_str($env, file!()),
                    line!()
                );
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!(
                    $env,
                    "Error {} thrown at {}:{}",
                    error_code as u32,
                    soroban_sdk::String::from_str($env, file!()),
                    line!()
                );
                soroban_sdk::log!($env, $($arg)+);
                Err(error_code)
            }
        }
    };
}

#[macro_export]
macro_rules! math_error {
    ($env:expr) => {
        || {
            let error_code = $crate::error::ErrorCode::MathError;
            soroban_sdk::log!(
                $env,
                "Math error thrown at {}:{}",
                soroban_sdk::String::from_str($env, file!()),
                line!()
            );
            error_code
        }
    };
}

#[macro_export]
macro_rules! safe_increment {
    ($env:expr, $struct:expr, $value:expr) => {{
        $struct = $struct.checked_add($value).ok_or_else($crate::math_error!($env))?
    }};
}
