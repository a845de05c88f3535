use super::BuildError;

/// Compiles a WGSL shader module and checks the compiler's diagnostics.
///
/// Module creation runs inside a validation error scope, so invalid WGSL
/// comes back as [`BuildError::Shader`] instead of reaching the device's
/// uncaptured-error handler. Warnings are logged.
pub fn build_shader(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, BuildError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let scoped = pollster::block_on(scope.pop());

    let info = pollster::block_on(module.get_compilation_info());

    let mut errors = Vec::new();
    for message in &info.messages {
        let text = describe(message);
        match message.message_type {
            wgpu::CompilationMessageType::Error => errors.push(text),
            wgpu::CompilationMessageType::Warning => log::warn!("shader `{label}`: {text}"),
            wgpu::CompilationMessageType::Info => log::debug!("shader `{label}`: {text}"),
        }
    }

    // Compilation info carries source locations; the scoped error is the fallback.
    if errors.is_empty() {
        if let Some(err) = scoped {
            errors.push(err.to_string());
        }
    }

    if !errors.is_empty() {
        return Err(BuildError::Shader {
            label: label.to_string(),
            diagnostics: errors.join("\n"),
        });
    }

    log::debug!("shader `{label}` compiled");
    Ok(module)
}

fn describe(message: &wgpu::CompilationMessage) -> String {
    match &message.location {
        Some(loc) => format!("{}:{}: {}", loc.line_number, loc.line_position, message.message),
        None => message.message.clone(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Device on the noop backend: validates like a real one, draws nothing.
    pub(crate) fn noop_device() -> (wgpu::Device, wgpu::Queue) {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::NOOP,
            backend_options: wgpu::BackendOptions {
                noop: wgpu::NoopBackendOptions { enable: true },
                ..Default::default()
            },
            ..Default::default()
        });
        let adapter =
            pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default()))
                .unwrap();
        pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            required_limits: wgpu::Limits::downlevel_defaults(),
            ..Default::default()
        }))
        .unwrap()
    }

    #[test]
    fn builtin_shader_compiles() {
        let (device, _queue) = noop_device();
        assert!(build_shader(&device, "mesh", crate::render::mesh::MESH_WGSL).is_ok());
    }

    #[test]
    fn invalid_wgsl_is_a_build_error() {
        let (device, _queue) = noop_device();
        let err = build_shader(&device, "bad", "fn vs_main( -> {").unwrap_err();
        let BuildError::Shader { label, diagnostics } = err;
        assert_eq!(label, "bad");
        assert!(!diagnostics.is_empty());
    }
}
